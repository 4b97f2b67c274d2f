//! Game configuration resource.
//!
//! Manages engine settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [worlds]
//! root = ./worlds
//!
//! [physics]
//! gravity_rise = 34.0
//! gravity_fall = 20.0
//!
//! [player]
//! walk_speed = 240.0
//! jump_impulse = 12.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WORLDS_ROOT: &str = "./worlds";
const DEFAULT_GRAVITY_RISE: f32 = 34.0;
const DEFAULT_GRAVITY_FALL: f32 = 20.0;
const DEFAULT_WALK_SPEED: f32 = 240.0;
const DEFAULT_JUMP_IMPULSE: f32 = 12.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration resource.
///
/// Stores the worlds root directory and the movement tunables applied to the
/// player body on spawn. Values missing from the file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Directory that holds the `world<id>` directories.
    pub worlds_root: PathBuf,
    /// Vertical velocity lost per second while a body still moves upward.
    pub gravity_rise: f32,
    /// Vertical velocity lost per second once a body moves downward.
    pub gravity_fall: f32,
    /// Horizontal walk speed in pixels per second.
    pub walk_speed: f32,
    /// Jump impulse in pixels per tick.
    pub jump_impulse: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            worlds_root: PathBuf::from(DEFAULT_WORLDS_ROOT),
            gravity_rise: DEFAULT_GRAVITY_RISE,
            gravity_fall: DEFAULT_GRAVITY_FALL,
            walk_speed: DEFAULT_WALK_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [worlds] section
        if let Some(root) = config.get("worlds", "root") {
            self.worlds_root = PathBuf::from(root);
        }

        // [physics] section
        if let Some(rate) = config.getfloat("physics", "gravity_rise").ok().flatten() {
            self.gravity_rise = rate as f32;
        }
        if let Some(rate) = config.getfloat("physics", "gravity_fall").ok().flatten() {
            self.gravity_fall = rate as f32;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "walk_speed").ok().flatten() {
            self.walk_speed = speed as f32;
        }
        if let Some(impulse) = config.getfloat("player", "jump_impulse").ok().flatten() {
            self.jump_impulse = impulse as f32;
        }

        info!("Loaded configuration from {}", self.config_path.display());
        Ok(())
    }

    /// Write the current configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        config.set(
            "worlds",
            "root",
            Some(self.worlds_root.display().to_string()),
        );
        config.set(
            "physics",
            "gravity_rise",
            Some(self.gravity_rise.to_string()),
        );
        config.set(
            "physics",
            "gravity_fall",
            Some(self.gravity_fall.to_string()),
        );
        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set(
            "player",
            "jump_impulse",
            Some(self.jump_impulse.to_string()),
        );
        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

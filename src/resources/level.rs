//! Level grid storage and persistence.
//!
//! A [`Level`] is a fixed 64×32 grid of [`ObjectType`] cells addressed in
//! tile coordinates with `y = 0` at the bottom, matching the coordinate
//! convention used by movement and rendering. Every cell is always populated;
//! a fresh level is all [`ObjectType::Air`].
//!
//! # Data file format
//!
//! One plain-text file per level at
//! `<worlds_root>/world<world_id>/level<id>.lvl`: exactly [`HEIGHT`] lines of
//! up to [`WIDTH`] digit characters, one digit per cell. Row order is
//! inverted — the first line is the topmost row (`y = HEIGHT - 1`). Short
//! lines leave their trailing cells at Air, unrecognized digits decode to
//! Air, and a missing file is not an error (the world directory is created
//! and the level stays empty).

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::resources::objecttype::ObjectType;

/// Level width in tiles.
pub const WIDTH: usize = 64;
/// Level height in tiles.
pub const HEIGHT: usize = 32;
/// Side of a square tile in pixels.
pub const TILE_SIZE: f32 = 32.0;
/// Extension of level data files.
pub const LEVEL_FILE_EXT: &str = "lvl";

/// Value snapshot of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate in tiles.
    pub x: i32,
    /// Y coordinate in tiles, bottom-up.
    pub y: i32,
    /// Material of the cell.
    pub kind: ObjectType,
}

/// A fixed-size tile grid owned by a [`GameWorld`](crate::resources::gameworld::GameWorld).
///
/// Cloneable so that fully-built snapshots can be handed across threads and
/// published to the simulation without sharing mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    id: u8,
    world_id: u8,
    /// Cells indexed `[y][x]`, bottom row first.
    cells: [[ObjectType; WIDTH]; HEIGHT],
}

impl Level {
    /// Create a level with every cell set to Air.
    pub fn new(world_id: u8, id: u8) -> Self {
        Self {
            id,
            world_id,
            cells: [[ObjectType::Air; WIDTH]; HEIGHT],
        }
    }

    /// The level's id within its world (also its slot index).
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Id of the owning world.
    pub fn world_id(&self) -> u8 {
        self.world_id
    }

    /// Whether `(x, y)` addresses a cell of the grid.
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// The cell at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(Tile {
            x,
            y,
            kind: self.cells[y as usize][x as usize],
        })
    }

    /// Replace the material of the cell at `(x, y)` in place.
    ///
    /// Used by the level editor. Out-of-range coordinates are a logged no-op.
    pub fn set_type(&mut self, x: i32, y: i32, kind: ObjectType) {
        if !Self::in_bounds(x, y) {
            warn!(
                "Ignoring set_type at ({}, {}) in level {} of world {} - out of range",
                x, y, self.id, self.world_id
            );
            return;
        }
        self.cells[y as usize][x as usize] = kind;
    }

    /// Path of the data file for level `id` of world `world_id`.
    pub fn file_path(worlds_root: &Path, world_id: u8, id: u8) -> PathBuf {
        worlds_root
            .join(format!("world{}", world_id))
            .join(format!("level{}.{}", id, LEVEL_FILE_EXT))
    }

    /// Path of this level's data file.
    pub fn disk_location(&self, worlds_root: &Path) -> PathBuf {
        Self::file_path(worlds_root, self.world_id, self.id)
    }

    /// Read the level's cells from its data file.
    ///
    /// Only non-Air codes are written into the grid; the backing array stays
    /// pre-filled with Air, so short lines and missing trailing rows keep
    /// their default. If the file does not exist, the world directory is
    /// created and the level is left empty.
    pub fn load(&mut self, worlds_root: &Path) -> Result<(), String> {
        let path = self.disk_location(worlds_root);
        if !path.exists() {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|e| {
                    format!("Failed to create world directory {}: {}", dir.display(), e)
                })?;
            }
            debug!(
                "Level file {} does not exist, leaving level {} of world {} empty",
                path.display(),
                self.id,
                self.world_id
            );
            return Ok(());
        }
        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read level file {}: {}", path.display(), e))?;
        for (row, line) in contents.lines().take(HEIGHT).enumerate() {
            let y = HEIGHT - 1 - row;
            for (x, code) in line.chars().take(WIDTH).enumerate() {
                let kind = ObjectType::decode(code);
                if kind != ObjectType::Air {
                    self.cells[y][x] = kind;
                }
            }
        }
        debug!("Loaded level {} of world {}", self.id, self.world_id);
        Ok(())
    }

    /// Write the full grid to the level's data file.
    ///
    /// Exactly [`HEIGHT`] lines of exactly [`WIDTH`] digits, topmost row
    /// first, so that a save followed by a load reproduces the grid
    /// cell for cell.
    pub fn save(&self, worlds_root: &Path) -> Result<(), String> {
        let path = self.disk_location(worlds_root);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                format!("Failed to create world directory {}: {}", dir.display(), e)
            })?;
        }
        let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
        for y in (0..HEIGHT).rev() {
            for x in 0..WIDTH {
                out.push(self.cells[y][x].encode());
            }
            out.push('\n');
        }
        fs::write(&path, out)
            .map_err(|e| format!("Failed to write level file {}: {}", path.display(), e))?;
        debug!("Saved level {} of world {}", self.id, self.world_id);
        Ok(())
    }
}

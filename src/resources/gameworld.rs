//! A world: up to five levels bundled under one directory.
//!
//! Each [`GameWorld`] owns a fixed array of level slots; the slot index of a
//! level always equals the level's own id. On disk a world is the directory
//! `<worlds_root>/world<id>` containing zero or more `level<d>.lvl` files.
//! Load and save are best-effort: missing directories are created, malformed
//! filenames are skipped, and a failure on one level never aborts the rest.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::resources::level::{Level, LEVEL_FILE_EXT};

/// Number of level slots per world, and of world slots overall.
pub const SLOT_COUNT: usize = 5;

/// An indexed collection of up to [`SLOT_COUNT`] levels.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWorld {
    id: u8,
    levels: [Option<Level>; SLOT_COUNT],
}

/// Parse a level id out of a directory entry name.
///
/// Only names of exactly the form `level<d>.lvl` with `d` in `0..=4` are
/// accepted; anything else is ignored by the world scan.
pub fn parse_level_file_name(name: &str) -> Option<u8> {
    let digits = name
        .strip_prefix("level")?
        .strip_suffix(&format!(".{}", LEVEL_FILE_EXT))?;
    let mut chars = digits.chars();
    let digit = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let id = digit.to_digit(10)? as u8;
    if (id as usize) < SLOT_COUNT { Some(id) } else { None }
}

impl GameWorld {
    /// Create an empty world with the given slot id.
    pub fn new(id: u8) -> Self {
        Self {
            id,
            levels: Default::default(),
        }
    }

    /// The world's slot id.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// The world's directory under `worlds_root`.
    pub fn disk_location(&self, worlds_root: &Path) -> PathBuf {
        worlds_root.join(format!("world{}", self.id))
    }

    /// All level slots, in id order.
    pub fn levels(&self) -> &[Option<Level>; SLOT_COUNT] {
        &self.levels
    }

    /// The first populated slot, if any. The play state starts here when no
    /// level is active yet.
    pub fn first_loaded_level(&self) -> Option<&Level> {
        self.levels.iter().flatten().next()
    }

    /// True iff at least one slot is populated.
    pub fn contains_loaded_levels(&self) -> bool {
        self.levels.iter().any(Option::is_some)
    }

    /// Scan the world directory and load every level file found.
    ///
    /// An absent directory is created and leaves the world empty. Entries
    /// that do not match the `level<d>.lvl` naming convention are ignored.
    /// A level that fails to read is logged and skipped.
    pub fn load(&mut self, worlds_root: &Path) {
        debug!("Loading world {}", self.id);
        let dir = self.disk_location(worlds_root);
        if !dir.exists() {
            debug!(
                "World {} does not exist, creating its directory {}",
                self.id,
                dir.display()
            );
            if let Err(e) = fs::create_dir_all(&dir) {
                error!("Failed to create world directory {}: {}", dir.display(), e);
            }
            return;
        }
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Failed to scan world directory {}: {}", dir.display(), e);
                return;
            }
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(id) = parse_level_file_name(&name.to_string_lossy()) else {
                continue;
            };
            let mut level = Level::new(self.id, id);
            match level.load(worlds_root) {
                Ok(()) => self.levels[id as usize] = Some(level),
                Err(e) => error!("{}", e),
            }
        }
        if !self.contains_loaded_levels() {
            debug!(
                "No level files were found for world {} - check the level file names",
                self.id
            );
        }
    }

    /// Save every populated slot to disk.
    ///
    /// A world without loaded levels is a logged no-op. A failure on one
    /// level does not abort the others.
    pub fn save(&self, worlds_root: &Path) {
        debug!("Saving world {}", self.id);
        if !self.contains_loaded_levels() {
            info!(
                "Skipping save of world {} - it does not contain any loaded levels",
                self.id
            );
            return;
        }
        for level in self.levels.iter().flatten() {
            if let Err(e) = level.save(worlds_root) {
                error!("{}", e);
            }
        }
    }

    /// The level in slot `id`, or `None` when the slot is empty or the id is
    /// out of range (logged).
    pub fn get_level(&self, id: u8) -> Option<&Level> {
        if id as usize >= SLOT_COUNT {
            error!(
                "Could not retrieve level {} in world {} - invalid level id (must be 0 to 4)",
                id, self.id
            );
            return None;
        }
        self.levels[id as usize].as_ref()
    }

    /// Mutable access to the level in slot `id`, with the same validation as
    /// [`GameWorld::get_level`]. Used by the level editor.
    pub fn get_level_mut(&mut self, id: u8) -> Option<&mut Level> {
        if id as usize >= SLOT_COUNT {
            error!(
                "Could not retrieve level {} in world {} - invalid level id (must be 0 to 4)",
                id, self.id
            );
            return None;
        }
        self.levels[id as usize].as_mut()
    }

    /// Place `level` in the slot matching its id.
    ///
    /// An out-of-range id is a logged no-op; overwriting an occupied slot is
    /// permitted with a warning.
    pub fn add_level(&mut self, level: Level) {
        let id = level.id();
        if id as usize >= SLOT_COUNT {
            error!(
                "Failed to add level {} to world {} - invalid level id (must be 0 to 4)",
                id, self.id
            );
            return;
        }
        if self.levels[id as usize].is_some() {
            warn!("Overwriting level {} in world {}", id, self.id);
        }
        self.levels[id as usize] = Some(level);
    }

    /// Clear the slot with the given id. Out-of-range or empty slots are
    /// logged no-ops.
    pub fn delete_level(&mut self, id: u8) {
        if id as usize >= SLOT_COUNT {
            error!(
                "Failed to delete level {} - invalid level id (must be 0 to 4)",
                id
            );
            return;
        }
        if self.levels[id as usize].is_none() {
            error!(
                "Failed to delete level {} in world {} - level does not exist",
                id, self.id
            );
            return;
        }
        self.levels[id as usize] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_is_empty() {
        let world = GameWorld::new(0);
        assert!(!world.contains_loaded_levels());
        assert!(world.first_loaded_level().is_none());
    }

    #[test]
    fn test_add_level_lands_in_matching_slot() {
        let mut world = GameWorld::new(1);
        world.add_level(Level::new(1, 3));
        assert!(world.get_level(3).is_some());
        assert!(world.get_level(0).is_none());
        assert_eq!(world.get_level(3).unwrap().id(), 3);
    }

    #[test]
    fn test_add_level_out_of_range_is_noop() {
        let mut world = GameWorld::new(0);
        world.add_level(Level::new(0, 5));
        assert!(!world.contains_loaded_levels());
    }

    #[test]
    fn test_add_level_overwrites_occupied_slot() {
        let mut world = GameWorld::new(0);
        let mut first = Level::new(0, 2);
        first.set_type(0, 0, crate::resources::objecttype::ObjectType::Stone);
        world.add_level(first);
        world.add_level(Level::new(0, 2));
        // The replacement (all-air) level wins.
        let kind = world.get_level(2).unwrap().get(0, 0).unwrap().kind;
        assert_eq!(kind, crate::resources::objecttype::ObjectType::Air);
    }

    #[test]
    fn test_get_level_out_of_range_is_none() {
        let world = GameWorld::new(0);
        assert!(world.get_level(5).is_none());
        assert!(world.get_level(255).is_none());
    }

    #[test]
    fn test_delete_level() {
        let mut world = GameWorld::new(0);
        world.add_level(Level::new(0, 1));
        world.delete_level(1);
        assert!(world.get_level(1).is_none());
        // Deleting again (or out of range) stays a no-op.
        world.delete_level(1);
        world.delete_level(9);
    }

    #[test]
    fn test_first_loaded_level_picks_lowest_slot() {
        let mut world = GameWorld::new(0);
        world.add_level(Level::new(0, 4));
        world.add_level(Level::new(0, 2));
        assert_eq!(world.first_loaded_level().unwrap().id(), 2);
    }

    // ==================== FILE NAME FILTER TESTS ====================

    #[test]
    fn test_parse_level_file_name_accepts_convention() {
        assert_eq!(parse_level_file_name("level0.lvl"), Some(0));
        assert_eq!(parse_level_file_name("level4.lvl"), Some(4));
    }

    #[test]
    fn test_parse_level_file_name_rejects_everything_else() {
        assert_eq!(parse_level_file_name("level5.lvl"), None);
        assert_eq!(parse_level_file_name("level12.lvl"), None);
        assert_eq!(parse_level_file_name("levelx.lvl"), None);
        assert_eq!(parse_level_file_name("level0.txt"), None);
        assert_eq!(parse_level_file_name("level.lvl"), None);
        assert_eq!(parse_level_file_name("readme.md"), None);
        assert_eq!(parse_level_file_name("0level.lvl"), None);
    }
}

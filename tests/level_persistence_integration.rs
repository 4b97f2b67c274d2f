//! Persistence integration tests for levels and worlds: round trips,
//! tolerance of malformed data, and directory-scan filtering.

use std::fs;

use tempfile::TempDir;

use gridhopper::resources::gameworld::GameWorld;
use gridhopper::resources::level::{HEIGHT, Level, WIDTH};
use gridhopper::resources::objecttype::ObjectType;

/// A level with a recognizable, asymmetric pattern touching every variant.
fn patterned_level(world_id: u8, id: u8) -> Level {
    let mut level = Level::new(world_id, id);
    for x in 0..WIDTH as i32 {
        level.set_type(x, 0, ObjectType::Stone);
    }
    level.set_type(3, 1, ObjectType::Brick);
    level.set_type(10, 4, ObjectType::Ice);
    level.set_type(11, 4, ObjectType::Spike);
    level.set_type(0, 7, ObjectType::Portal);
    level.set_type(63, 31, ObjectType::Key);
    level.set_type(62, 30, ObjectType::Potion);
    level.set_type(20, 15, ObjectType::Present);
    level
}

#[test]
fn save_then_load_is_identity() {
    let dir = TempDir::new().unwrap();
    let saved = patterned_level(0, 2);
    saved.save(dir.path()).unwrap();

    let mut loaded = Level::new(0, 2);
    loaded.load(dir.path()).unwrap();

    assert_eq!(saved, loaded);
}

#[test]
fn save_writes_full_grid_in_inverted_row_order() {
    let dir = TempDir::new().unwrap();
    let mut level = Level::new(1, 0);
    level.set_type(0, HEIGHT as i32 - 1, ObjectType::Stone);
    level.set_type(5, 0, ObjectType::Brick);
    level.save(dir.path()).unwrap();

    let text = fs::read_to_string(Level::file_path(dir.path(), 1, 0)).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), HEIGHT);
    for line in &lines {
        assert_eq!(line.len(), WIDTH);
    }
    // Topmost grid row comes first.
    assert!(lines[0].starts_with('1'));
    // Bottom grid row comes last.
    assert_eq!(lines[HEIGHT - 1].as_bytes()[5], b'2');
}

#[test]
fn load_reads_first_line_as_top_row() {
    let dir = TempDir::new().unwrap();
    let path = Level::file_path(dir.path(), 0, 0);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "1\n").unwrap();

    let mut level = Level::new(0, 0);
    level.load(dir.path()).unwrap();

    assert_eq!(
        level.get(0, HEIGHT as i32 - 1).unwrap().kind,
        ObjectType::Stone
    );
    assert_eq!(level.get(0, 0).unwrap().kind, ObjectType::Air);
}

#[test]
fn load_tolerates_short_lines_and_unknown_codes() {
    let dir = TempDir::new().unwrap();
    let path = Level::file_path(dir.path(), 0, 0);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    // Two lines: a short one with an unknown code, then nothing.
    fs::write(&path, "1z2\n\n3\n").unwrap();

    let mut level = Level::new(0, 0);
    level.load(dir.path()).unwrap();

    let top = HEIGHT as i32 - 1;
    assert_eq!(level.get(0, top).unwrap().kind, ObjectType::Stone);
    // Unknown code decodes to air.
    assert_eq!(level.get(1, top).unwrap().kind, ObjectType::Air);
    assert_eq!(level.get(2, top).unwrap().kind, ObjectType::Brick);
    // Short line leaves the rest of the row at air.
    assert_eq!(level.get(3, top).unwrap().kind, ObjectType::Air);
    // Blank second line leaves the whole row at air.
    assert_eq!(level.get(0, top - 1).unwrap().kind, ObjectType::Air);
    assert_eq!(level.get(0, top - 2).unwrap().kind, ObjectType::Ice);
}

#[test]
fn load_ignores_extra_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    let path = Level::file_path(dir.path(), 0, 0);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let long_line = "1".repeat(WIDTH + 10);
    let mut text = String::new();
    for _ in 0..HEIGHT + 3 {
        text.push_str(&long_line);
        text.push('\n');
    }
    fs::write(&path, text).unwrap();

    let mut level = Level::new(0, 0);
    level.load(dir.path()).unwrap();

    for y in 0..HEIGHT as i32 {
        for x in 0..WIDTH as i32 {
            assert_eq!(level.get(x, y).unwrap().kind, ObjectType::Stone);
        }
    }
}

#[test]
fn load_missing_file_creates_directory_and_leaves_level_empty() {
    let dir = TempDir::new().unwrap();
    let mut level = Level::new(4, 3);
    level.load(dir.path()).unwrap();

    assert!(dir.path().join("world4").is_dir());
    assert_eq!(level, Level::new(4, 3));
}

// ==================== WORLD TESTS ====================

#[test]
fn world_load_missing_directory_creates_it_and_stays_empty() {
    let dir = TempDir::new().unwrap();
    let mut world = GameWorld::new(3);
    world.load(dir.path());

    assert!(dir.path().join("world3").is_dir());
    assert!(!world.contains_loaded_levels());
}

#[test]
fn world_scan_accepts_only_conforming_level_files() {
    let dir = TempDir::new().unwrap();
    let world_dir = dir.path().join("world0");
    fs::create_dir_all(&world_dir).unwrap();
    fs::write(world_dir.join("level0.lvl"), "").unwrap();
    fs::write(world_dir.join("level3.lvl"), "1\n").unwrap();
    fs::write(world_dir.join("level5.lvl"), "1\n").unwrap();
    fs::write(world_dir.join("level12.lvl"), "1\n").unwrap();
    fs::write(world_dir.join("level0.txt"), "1\n").unwrap();
    fs::write(world_dir.join("readme.md"), "not a level").unwrap();

    let mut world = GameWorld::new(0);
    world.load(dir.path());

    assert!(world.get_level(0).is_some());
    assert!(world.get_level(3).is_some());
    assert!(world.get_level(1).is_none());
    assert!(world.get_level(2).is_none());
    assert!(world.get_level(4).is_none());
    // The slot index matches the parsed id.
    assert_eq!(world.get_level(3).unwrap().id(), 3);
}

#[test]
fn world_save_skips_when_no_levels_are_loaded() {
    let dir = TempDir::new().unwrap();
    let world = GameWorld::new(2);
    world.save(dir.path());

    assert!(!dir.path().join("world2").exists());
}

#[test]
fn world_save_then_load_round_trips_every_slot() {
    let dir = TempDir::new().unwrap();
    let mut world = GameWorld::new(1);
    world.add_level(patterned_level(1, 0));
    world.add_level(patterned_level(1, 4));
    world.save(dir.path());

    let mut reloaded = GameWorld::new(1);
    reloaded.load(dir.path());

    assert_eq!(world, reloaded);
}

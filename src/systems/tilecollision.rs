//! Axis-separated tile collision resolution.
//!
//! [`resolve_tile_collisions`] clamps a kinematic body's proposed per-tick
//! displacement against the solid tiles of a [`Level`]. The horizontal axis
//! is always resolved before the vertical axis; the order is load-bearing for
//! concave corner outcomes and must not change.
//!
//! Each pass sweeps the body's leading edge from the tile line it currently
//! occupies to the line it would occupy after the proposed displacement, so a
//! displacement larger than one tile cannot tunnel through a solid. Within a
//! pass the first blocking line wins: the body is clamped against it exactly
//! once and the pass ends.
//!
//! Tile lines outside the grid count as solid boundary on both axes. A body
//! clamped by a tile below it, or by the bottom boundary, is grounded
//! (`airborne` cleared).
//!
//! The resolver performs no I/O and cannot panic; every grid access is
//! bounds-checked.

use glam::Vec2;

use crate::components::kinematicbody::KinematicBody;
use crate::resources::level::{HEIGHT, Level, TILE_SIZE, WIDTH};

/// Tile index of the tile line containing a pixel coordinate.
fn tile_index(coord: f32) -> i32 {
    (coord / TILE_SIZE).floor() as i32
}

/// Whether any cell of `col` between `row_lo..=row_hi` blocks movement.
/// Columns outside the grid always block; rows outside the grid are skipped.
fn column_blocked(level: &Level, col: i32, row_lo: i32, row_hi: i32) -> bool {
    if col < 0 || col >= WIDTH as i32 {
        return true;
    }
    for row in row_lo.max(0)..=row_hi.min(HEIGHT as i32 - 1) {
        if let Some(tile) = level.get(col, row) {
            if !tile.kind.is_penetrable() {
                return true;
            }
        }
    }
    false
}

/// Whether any cell of `row` between `col_lo..=col_hi` blocks movement.
/// Out-of-grid rows are handled by the caller (implicit boundary); out-of-grid
/// columns are skipped.
fn row_blocked(level: &Level, row: i32, col_lo: i32, col_hi: i32) -> bool {
    for col in col_lo.max(0)..=col_hi.min(WIDTH as i32 - 1) {
        if let Some(tile) = level.get(col, row) {
            if !tile.kind.is_penetrable() {
                return true;
            }
        }
    }
    false
}

/// Clamp `body.velocity` and correct `pos` against the level's solid tiles.
///
/// Call once per tick after gravity integration and before the velocity is
/// applied to the position. Bodies with `can_penetrate_objects` are left
/// untouched.
pub fn resolve_tile_collisions(level: &Level, pos: &mut Vec2, body: &mut KinematicBody) {
    if body.can_penetrate_objects {
        return;
    }
    resolve_horizontal(level, pos, body);
    resolve_vertical(level, pos, body);
}

/// Horizontal pass: sweep the leading vertical edge across tile columns.
fn resolve_horizontal(level: &Level, pos: &mut Vec2, body: &mut KinematicBody) {
    let vx = body.velocity.x;
    if vx == 0.0 {
        return;
    }
    let moving_left = vx < 0.0;
    let (start, target) = if moving_left {
        (tile_index(pos.x), tile_index(pos.x + vx))
    } else {
        (
            tile_index(pos.x + body.size.x),
            tile_index(pos.x + body.size.x + vx),
        )
    };
    let row_lo = tile_index(pos.y);
    let row_hi = tile_index(pos.y + body.size.y);
    let step = if moving_left { -1 } else { 1 };
    let mut col = start;
    loop {
        if column_blocked(level, col, row_lo, row_hi) {
            if moving_left {
                pos.x = (col + 1) as f32 * TILE_SIZE;
            } else {
                // Inset by one pixel on the trailing side to avoid a seam.
                pos.x = col as f32 * TILE_SIZE - body.size.x - 1.0;
            }
            body.velocity.x = 0.0;
            return;
        }
        if col == target {
            return;
        }
        col += step;
    }
}

/// Vertical pass: sweep the leading horizontal edge across tile rows.
fn resolve_vertical(level: &Level, pos: &mut Vec2, body: &mut KinematicBody) {
    let vy = body.velocity.y;
    if vy == 0.0 {
        return;
    }
    let moving_down = vy < 0.0;
    let (start, target) = if moving_down {
        (tile_index(pos.y), tile_index(pos.y + vy))
    } else {
        (
            tile_index(pos.y + body.size.y),
            tile_index(pos.y + body.size.y + vy),
        )
    };
    let col_lo = tile_index(pos.x);
    let col_hi = tile_index(pos.x + body.size.x);
    let step = if moving_down { -1 } else { 1 };
    let mut row = start;
    loop {
        if row < 0 || row >= HEIGHT as i32 {
            // Implicit solid boundary past the grid edge.
            if moving_down {
                pos.y = 0.0;
                body.airborne = false;
            } else {
                pos.y = HEIGHT as f32 * TILE_SIZE - body.size.y - 1.0;
            }
            body.velocity.y = 0.0;
            return;
        }
        if row_blocked(level, row, col_lo, col_hi) {
            if moving_down {
                pos.y = (row + 1) as f32 * TILE_SIZE;
                body.airborne = false;
            } else {
                pos.y = row as f32 * TILE_SIZE - body.size.y - 1.0;
            }
            body.velocity.y = 0.0;
            return;
        }
        if row == target {
            return;
        }
        row += step;
    }
}

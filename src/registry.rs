//! Zone layout generation
//!
//! Produces the ordered zone list for a new world, either from a fixed
//! hand-authored table or from a seeded grid. Order matters: the resolver
//! gives precedence to earlier zones, and the catch-all always comes last.

use log::{debug, info};

use crate::config::{GridLayout, LayoutMode};
use crate::error::{Result, ZoneError};
use crate::random::SeededRandom;
use crate::zone::{WorldPos, Zone, ZoneKind};

/// Per-cell seed multipliers.
const CELL_SEED_X: i64 = 12345;
const CELL_SEED_Z: i64 = 54321;

/// Chance that a cell ignores its quadrant's kind and picks any kind.
pub const OVERRIDE_CHANCE: f64 = 0.2;

/// Position jitter as a fraction of cell spacing (applied as +/-).
pub const POSITION_JITTER: f64 = 0.2;

/// Base zone radius as a fraction of cell spacing.
pub const BASE_RADIUS_FACTOR: f64 = 0.6;

/// Radius scale range applied on top of the base radius.
pub const RADIUS_JITTER: (f64, f64) = (0.85, 1.15);

/// Catch-all radius as a multiple of the grid half-extent.
pub const CATCH_ALL_MARGIN: f32 = 1.5;

/// Build zones for the configured layout mode.
pub fn generate(mode: &LayoutMode) -> Result<Vec<Zone>> {
    match mode {
        LayoutMode::Static => Ok(static_layout()),
        LayoutMode::Grid(layout) => generate_grid(layout),
    }
}

/// Hand-authored layout used by the simplified world.
pub fn static_layout() -> Vec<Zone> {
    vec![
        Zone::of_kind(ZoneKind::Terrant, WorldPos::ORIGIN, 150.0),
        Zone::of_kind(ZoneKind::Forest, WorldPos::flat(200.0, 0.0), 120.0),
        Zone::of_kind(ZoneKind::Desert, WorldPos::flat(-220.0, 80.0), 130.0),
        Zone::of_kind(ZoneKind::Mountains, WorldPos::flat(0.0, -260.0), 140.0),
        Zone::of_kind(ZoneKind::Swamp, WorldPos::flat(180.0, 220.0), 100.0),
        Zone::of_kind(ZoneKind::Ruins, WorldPos::flat(-150.0, -200.0), 60.0),
        Zone::of_kind(ZoneKind::DarkSanctum, WorldPos::flat(320.0, -300.0), 80.0),
    ]
}

/// Kind a cell gets before any random override, by quadrant.
pub fn expected_kind(cell_x: i32, cell_z: i32) -> ZoneKind {
    match (cell_x >= 0, cell_z >= 0) {
        (true, true) => ZoneKind::Forest,
        (false, true) => ZoneKind::Mountains,
        (false, false) => ZoneKind::Desert,
        (true, false) => ZoneKind::Swamp,
    }
}

/// Seed for one grid cell.
pub fn cell_seed(cell_x: i32, cell_z: i32, world_seed: i64) -> i64 {
    (cell_x as i64 * CELL_SEED_X)
        .wrapping_add(cell_z as i64 * CELL_SEED_Z)
        .wrapping_add(world_seed)
}

/// Generate one zone per grid cell, then the catch-all.
///
/// Cells run z-major from `-range` to `range` inclusive. Each cell draws from
/// its own generator, so a cell's zone does not depend on its neighbours.
/// Fails for layouts rejected by [`GridLayout::validate`].
pub fn generate_grid(layout: &GridLayout) -> Result<Vec<Zone>> {
    layout.validate()?;
    let range = layout.range;
    let spacing = layout.spacing as f64;
    let side = grid_side(range)?;
    let cells = side
        .checked_mul(side)
        .ok_or_else(|| ZoneError::InvalidConfig(format!("grid range {} too large", range)))?;
    let mut zones = Vec::with_capacity(cells + 1);
    let mut overrides = 0usize;

    for cell_z in -range..=range {
        for cell_x in -range..=range {
            let mut rng = SeededRandom::new(cell_seed(cell_x, cell_z, layout.seed));

            let mut kind = expected_kind(cell_x, cell_z);
            if rng.next() < OVERRIDE_CHANCE {
                if let Some(&picked) = rng.pick(&ZoneKind::PLACEABLE) {
                    kind = picked;
                    overrides += 1;
                }
            }

            let jitter = spacing * POSITION_JITTER;
            let x = cell_x as f64 * spacing + rng.range(-jitter, jitter);
            let z = cell_z as f64 * spacing + rng.range(-jitter, jitter);
            let radius = spacing * BASE_RADIUS_FACTOR * rng.range(RADIUS_JITTER.0, RADIUS_JITTER.1);

            zones.push(Zone::of_kind(kind, WorldPos::flat(x as f32, z as f32), radius as f32));
        }
    }

    zones.push(catch_all(layout));

    info!(
        "Generated {} zones ({}x{} grid, spacing {:.1}, seed {}, {} overrides)",
        zones.len(),
        side,
        side,
        layout.spacing,
        layout.seed,
        overrides
    );
    debug!("Catch-all radius {:.1}", catch_all_radius(layout));

    Ok(zones)
}

/// Cells along one axis, `2 * range + 1`.
fn grid_side(range: i32) -> Result<usize> {
    range
        .checked_mul(2)
        .and_then(|r| r.checked_add(1))
        .and_then(|side| usize::try_from(side).ok())
        .ok_or_else(|| ZoneError::InvalidConfig(format!("grid range {} out of bounds", range)))
}

/// Half-width of the square the grid covers, including the outer cells' reach.
pub fn grid_half_extent(layout: &GridLayout) -> f32 {
    (layout.range.max(0) as f32 + 1.0) * layout.spacing
}

fn catch_all_radius(layout: &GridLayout) -> f32 {
    grid_half_extent(layout) * CATCH_ALL_MARGIN
}

fn catch_all(layout: &GridLayout) -> Zone {
    Zone::of_kind(ZoneKind::Terrant, WorldPos::ORIGIN, catch_all_radius(layout))
}

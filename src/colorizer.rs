//! Terrain paint colors for zones, and the terrain surface they are applied to.

use crate::color::Color;
use crate::config::ThemeColors;
use crate::zone::{WorldPos, ZoneKind};

/// Color used when nothing else matches.
pub const CATCH_ALL_COLOR: Color = ZoneKind::Terrant.color();

/// Pick the paint color for a zone.
///
/// Precedence: theme color for this zone, theme ground color, built-in
/// palette, catch-all palette.
pub fn color_for(zone_name: &str, theme: Option<&ThemeColors>) -> Color {
    theme
        .and_then(|t| t.color_for(zone_name))
        .or_else(|| ZoneKind::from_name(zone_name).map(|k| k.color()))
        .unwrap_or(CATCH_ALL_COLOR)
}

/// A terrain chunk as exposed by the terrain system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainChunk {
    pub chunk_x: i32,
    pub chunk_z: i32,
    /// World-space position of the chunk (its center)
    pub position: WorldPos,
}

/// The terrain system that owns chunk meshes.
///
/// Zone code reads chunks from it and pushes a single uniform color per chunk.
pub trait TerrainSurface {
    fn chunks(&self) -> Vec<TerrainChunk>;

    fn color_terrain_uniform(&mut self, chunk: &TerrainChunk, zone_name: &str, color: Color);
}

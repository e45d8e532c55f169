//! Zone types: named circular regions of the world and the built-in palette.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// World-space point. Zone logic only reads `x` and `z`; `y` is carried so
/// saved state round-trips unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub const ORIGIN: WorldPos = WorldPos { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point on the ground plane.
    pub const fn flat(x: f32, z: f32) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Distance on the xz plane.
    pub fn planar_distance(&self, other: &WorldPos) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// A named region of the world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub center: WorldPos,
    pub radius: f32,
    pub color: Color,
}

impl Zone {
    pub fn new(name: impl Into<String>, center: WorldPos, radius: f32, color: Color) -> Self {
        Self {
            name: name.into(),
            center,
            radius,
            color,
        }
    }

    /// Zone of a built-in kind, using the kind's palette color.
    pub fn of_kind(kind: ZoneKind, center: WorldPos, radius: f32) -> Self {
        Self::new(kind.name(), center, radius, kind.color())
    }

    pub fn distance_to(&self, pos: &WorldPos) -> f32 {
        self.center.planar_distance(pos)
    }

    pub fn contains(&self, pos: &WorldPos) -> bool {
        self.distance_to(pos) <= self.radius
    }
}

/// Built-in zone types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Catch-all grassland covering the whole world
    Terrant,
    Forest,
    Desert,
    Mountains,
    Swamp,
    Ruins,
    DarkSanctum,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 7] = [
        ZoneKind::Terrant,
        ZoneKind::Forest,
        ZoneKind::Desert,
        ZoneKind::Mountains,
        ZoneKind::Swamp,
        ZoneKind::Ruins,
        ZoneKind::DarkSanctum,
    ];

    /// Kinds that the procedural grid may place (everything but the catch-all).
    pub const PLACEABLE: [ZoneKind; 6] = [
        ZoneKind::Forest,
        ZoneKind::Desert,
        ZoneKind::Mountains,
        ZoneKind::Swamp,
        ZoneKind::Ruins,
        ZoneKind::DarkSanctum,
    ];

    /// Name as stored on zones and in saved state
    pub fn name(&self) -> &'static str {
        match self {
            ZoneKind::Terrant => "Terrant",
            ZoneKind::Forest => "Forest",
            ZoneKind::Desert => "Desert",
            ZoneKind::Mountains => "Mountains",
            ZoneKind::Swamp => "Swamp",
            ZoneKind::Ruins => "Ruins",
            ZoneKind::DarkSanctum => "Dark Sanctum",
        }
    }

    /// Get palette color for terrain paint
    pub const fn color(&self) -> Color {
        match self {
            ZoneKind::Terrant => Color::from_hex(0x4a9e4a),     // Meadow green
            ZoneKind::Forest => Color::from_hex(0x2f5e2f),      // Deep green
            ZoneKind::Desert => Color::from_hex(0xd2b48c),      // Tan
            ZoneKind::Mountains => Color::from_hex(0x8b8680),   // Gray stone
            ZoneKind::Swamp => Color::from_hex(0x4b5d3a),       // Murky olive
            ZoneKind::Ruins => Color::from_hex(0x9a8f7c),       // Weathered stone
            ZoneKind::DarkSanctum => Color::from_hex(0x2e1a33), // Dark purple
        }
    }

    /// Exact-name lookup. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<ZoneKind> {
        ZoneKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

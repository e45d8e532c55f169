//! Configuration for zone generation, chunk lookup and terrain theming.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Result, ZoneError};

/// Procedural grid parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Cells span `-range..=range` on both axes.
    pub range: i32,
    /// World units between cell centers.
    pub spacing: f32,
    /// World seed mixed into every cell seed.
    pub seed: i64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            range: 5,
            spacing: 500.0,
            seed: 0,
        }
    }
}

/// Largest accepted grid range; a grid holds `(2 * range + 1)^2` zones.
pub const MAX_GRID_RANGE: i32 = 256;

impl GridLayout {
    /// Reject layouts that cannot produce a covering set of zones.
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_GRID_RANGE).contains(&self.range) {
            return Err(ZoneError::InvalidConfig(format!(
                "grid range {} outside 0..={}",
                self.range, MAX_GRID_RANGE
            )));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ZoneError::InvalidConfig(format!(
                "grid spacing must be positive, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

/// Which zone layout a world uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Fixed hand-authored regions
    Static,
    /// Seeded grid of jittered regions plus a catch-all
    Grid(GridLayout),
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::Grid(GridLayout::default())
    }
}

/// Externally supplied terrain colors that take precedence over the
/// built-in zone palette.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Theme identifier, informational only
    pub name: String,
    /// Color for every zone without a zone-specific entry
    pub ground: Option<Color>,
    /// Per-zone-name colors
    pub zones: BTreeMap<String, Color>,
}

impl ThemeColors {
    /// Color this theme defines for a zone, if any.
    pub fn color_for(&self, zone_name: &str) -> Option<Color> {
        self.zones.get(zone_name).copied().or(self.ground)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Everything a [`crate::manager::ZoneManager`] needs to build a world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    pub layout: LayoutMode,
    /// Edge length of one terrain chunk in world units.
    pub chunk_size: f32,
    pub theme: Option<ThemeColors>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            chunk_size: 64.0,
            theme: None,
        }
    }
}

impl ZoneConfig {
    pub fn validate(&self) -> Result<()> {
        if let LayoutMode::Grid(grid) = &self.layout {
            grid.validate()?;
        }
        if !(self.chunk_size.is_finite() && self.chunk_size > 0.0) {
            return Err(ZoneError::InvalidConfig(format!(
                "chunk size must be positive, got {}",
                self.chunk_size
            )));
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

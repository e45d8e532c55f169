//! Zone layout library
//!
//! Deterministic zone generation, position-to-zone resolution, per-chunk
//! caching and terrain coloring for the game world.

pub mod cache;
pub mod color;
pub mod colorizer;
pub mod config;
pub mod error;
pub mod export;
pub mod manager;
pub mod persistence;
pub mod random;
pub mod registry;
pub mod resolver;
pub mod tilemap;
pub mod tracker;
pub mod zone;

pub use color::Color;
pub use config::{GridLayout, LayoutMode, ThemeColors, ZoneConfig};
pub use error::{Result, ZoneError};
pub use manager::ZoneManager;
pub use resolver::{ZoneLookup, ZoneResolver};
pub use zone::{WorldPos, Zone, ZoneKind};

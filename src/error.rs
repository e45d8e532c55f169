//! Error type shared by the zone library and its binaries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZoneError {
    /// A resolver needs at least one zone to answer queries.
    #[error("zone set is empty; generate or load zones first")]
    EmptyZoneSet,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid color {0:?} (expected #rrggbb or 0xrrggbb)")]
    InvalidColor(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ZoneError>;

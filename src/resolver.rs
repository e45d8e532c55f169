//! Position to zone resolution
//!
//! The first zone (in registration order) whose circle contains the point
//! wins. Points outside every zone fall back to the zone with the nearest
//! center, so every query has an answer.

use crate::error::{Result, ZoneError};
use crate::zone::{WorldPos, Zone};

/// Anything that can answer "which zone owns this point".
pub trait ZoneLookup {
    fn zone_at(&self, pos: &WorldPos) -> &Zone;
}

/// Resolves world positions against a fixed, non-empty zone list.
#[derive(Clone, Debug)]
pub struct ZoneResolver {
    zones: Vec<Zone>,
}

impl ZoneResolver {
    /// Fails only when `zones` is empty.
    pub fn new(zones: Vec<Zone>) -> Result<Self> {
        if zones.is_empty() {
            return Err(ZoneError::EmptyZoneSet);
        }
        Ok(Self { zones })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Owning zone for a position.
    pub fn resolve(&self, pos: &WorldPos) -> &Zone {
        match self.resolve_containing(pos) {
            Some(zone) => zone,
            None => self.nearest(pos),
        }
    }

    /// First registered zone containing `pos`, without fallback.
    pub fn resolve_containing(&self, pos: &WorldPos) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.contains(pos))
    }

    /// Zone with the closest center. Ties go to the earlier zone.
    pub fn nearest(&self, pos: &WorldPos) -> &Zone {
        let mut best = &self.zones[0];
        let mut best_dist = best.distance_to(pos);
        for zone in &self.zones[1..] {
            let d = zone.distance_to(pos);
            if d < best_dist {
                best = zone;
                best_dist = d;
            }
        }
        best
    }
}

impl ZoneLookup for ZoneResolver {
    fn zone_at(&self, pos: &WorldPos) -> &Zone {
        self.resolve(pos)
    }
}

//! Zone transition tracking for a moving entity (usually the player).

use crate::resolver::ZoneLookup;
use crate::zone::WorldPos;

/// Reported when the tracked entity crosses into a differently named zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneChange {
    /// `None` on the first update
    pub from: Option<String>,
    pub to: String,
}

/// Remembers the last zone an entity was in. Call [`ZoneTracker::update`]
/// once per frame from the host loop.
#[derive(Clone, Debug, Default)]
pub struct ZoneTracker {
    current: Option<String>,
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns a change when the zone name differs from the previous update.
    /// Moving between two regions that share a name is not a change.
    pub fn update<L: ZoneLookup + ?Sized>(
        &mut self,
        pos: &WorldPos,
        lookup: &L,
    ) -> Option<ZoneChange> {
        let name = &lookup.zone_at(pos).name;
        if self.current.as_deref() == Some(name.as_str()) {
            return None;
        }
        let from = self.current.replace(name.clone());
        Some(ZoneChange {
            from,
            to: name.clone(),
        })
    }

    /// Forget the current zone (world reload, teleport).
    pub fn reset(&mut self) {
        self.current = None;
    }
}

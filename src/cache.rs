//! Per-chunk memo of resolved zone names.
//!
//! Zones never move within a session, so entries are never invalidated
//! individually; the whole cache is cleared on world reload.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::trace;

use crate::resolver::ZoneLookup;
use crate::zone::WorldPos;

/// Zone names cached by `(chunk_x, chunk_z)`.
#[derive(Clone, Debug)]
pub struct ChunkZoneCache {
    chunk_size: f32,
    entries: HashMap<(i32, i32), String>,
    hits: u64,
    misses: u64,
}

impl ChunkZoneCache {
    pub fn new(chunk_size: f32) -> Self {
        Self {
            chunk_size,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn chunk_size(&self) -> f32 {
        self.chunk_size
    }

    /// World-space center of a chunk.
    pub fn chunk_center(&self, chunk_x: i32, chunk_z: i32) -> WorldPos {
        let half = self.chunk_size / 2.0;
        WorldPos::flat(
            chunk_x as f32 * self.chunk_size + half,
            chunk_z as f32 * self.chunk_size + half,
        )
    }

    /// Cached zone name for a chunk, resolving its center on first use.
    pub fn get_or_resolve<L: ZoneLookup + ?Sized>(
        &mut self,
        lookup: &L,
        chunk_x: i32,
        chunk_z: i32,
    ) -> &str {
        let center = self.chunk_center(chunk_x, chunk_z);

        match self.entries.entry((chunk_x, chunk_z)) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                entry.into_mut().as_str()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                let name = lookup.zone_at(&center).name.clone();
                trace!("chunk ({}, {}) -> {}", chunk_x, chunk_z, name);
                entry.insert(name).as_str()
            }
        }
    }

    /// Cached name without resolving.
    pub fn get(&self, chunk_x: i32, chunk_z: i32) -> Option<&str> {
        self.entries.get(&(chunk_x, chunk_z)).map(String::as_str)
    }

    /// Drop every entry (world reload).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of resolver calls made.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ZoneResolver;
    use crate::zone::{Zone, ZoneKind};
    use std::cell::Cell;

    /// Counts how often it is asked.
    struct CountingLookup {
        inner: ZoneResolver,
        calls: Cell<usize>,
    }

    impl ZoneLookup for CountingLookup {
        fn zone_at(&self, pos: &WorldPos) -> &Zone {
            self.calls.set(self.calls.get() + 1);
            self.inner.resolve(pos)
        }
    }

    fn counting() -> CountingLookup {
        CountingLookup {
            inner: ZoneResolver::new(vec![
                Zone::of_kind(ZoneKind::Terrant, WorldPos::ORIGIN, 150.0),
                Zone::of_kind(ZoneKind::Forest, WorldPos::flat(200.0, 0.0), 120.0),
            ])
            .unwrap(),
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_chunk_center() {
        let cache = ChunkZoneCache::new(64.0);
        assert_eq!(cache.chunk_center(0, 0), WorldPos::flat(32.0, 32.0));
        assert_eq!(cache.chunk_center(-1, 2), WorldPos::flat(-32.0, 160.0));
    }

    #[test]
    fn test_resolver_called_once_per_key() {
        let lookup = counting();
        let mut cache = ChunkZoneCache::new(64.0);

        let first = cache.get_or_resolve(&lookup, 3, 0).to_string();
        let second = cache.get_or_resolve(&lookup, 3, 0).to_string();
        assert_eq!(first, second);
        assert_eq!(first, "Forest");
        assert_eq!(lookup.calls.get(), 1);

        cache.get_or_resolve(&lookup, 0, 0);
        cache.get_or_resolve(&lookup, 0, 0);
        assert_eq!(lookup.calls.get(), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_clear_forces_re_resolve() {
        let lookup = counting();
        let mut cache = ChunkZoneCache::new(64.0);

        cache.get_or_resolve(&lookup, 1, 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(1, 1), None);

        cache.get_or_resolve(&lookup, 1, 1);
        assert_eq!(lookup.calls.get(), 2);
        assert_eq!(cache.get(1, 1), Some("Terrant"));
    }
}

//! Zone manager
//!
//! Owns the zone list, resolver and chunk cache for one world, and paints
//! terrain chunks through a [`TerrainSurface`]. All behavior is driven by an
//! explicit [`ZoneConfig`]; there is no global theme state.

use log::{debug, info, warn};

use crate::cache::ChunkZoneCache;
use crate::color::Color;
use crate::colorizer::{self, TerrainSurface};
use crate::config::{ThemeColors, ZoneConfig};
use crate::error::Result;
use crate::persistence::ZoneState;
use crate::registry;
use crate::resolver::{ZoneLookup, ZoneResolver};
use crate::zone::{WorldPos, Zone};

pub struct ZoneManager {
    config: ZoneConfig,
    resolver: ZoneResolver,
    cache: ChunkZoneCache,
}

impl ZoneManager {
    /// Build a world from the configured layout.
    pub fn new(config: ZoneConfig) -> Result<Self> {
        config.validate()?;
        let zones = registry::generate(&config.layout)?;
        Self::from_zones(zones, config)
    }

    /// Build a world around an existing zone list (e.g. loaded from disk).
    pub fn from_zones(zones: Vec<Zone>, config: ZoneConfig) -> Result<Self> {
        config.validate()?;
        let resolver = ZoneResolver::new(zones)?;
        let cache = ChunkZoneCache::new(config.chunk_size);
        Ok(Self {
            config,
            resolver,
            cache,
        })
    }

    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    pub fn zones(&self) -> &[Zone] {
        self.resolver.zones()
    }

    pub fn resolver(&self) -> &ZoneResolver {
        &self.resolver
    }

    pub fn cache(&self) -> &ChunkZoneCache {
        &self.cache
    }

    pub fn theme(&self) -> Option<&ThemeColors> {
        self.config.theme.as_ref()
    }

    /// Replace the theme for the rest of the session. Cached zone names stay
    /// valid since the theme only affects colors.
    pub fn set_theme(&mut self, theme: Option<ThemeColors>) {
        self.config.theme = theme;
    }

    /// Apply a new configuration.
    ///
    /// Regenerates zones when the layout changed. The chunk cache is always
    /// rebuilt. An invalid config leaves the manager unchanged.
    pub fn update(&mut self, config: ZoneConfig) -> Result<()> {
        config.validate()?;
        if config.layout != self.config.layout {
            let zones = registry::generate(&config.layout)?;
            self.resolver = ZoneResolver::new(zones)?;
            info!("Layout changed, regenerated {} zones", self.resolver.zones().len());
        }
        self.cache = ChunkZoneCache::new(config.chunk_size);
        self.config = config;
        Ok(())
    }

    /// Regenerate zones from the current layout, discarding loaded state.
    pub fn regenerate(&mut self) -> Result<()> {
        let zones = registry::generate(&self.config.layout)?;
        self.resolver = ZoneResolver::new(zones)?;
        self.cache.clear();
        Ok(())
    }

    pub fn zone_at(&self, pos: &WorldPos) -> &Zone {
        self.resolver.resolve(pos)
    }

    pub fn zone_for_chunk(&mut self, chunk_x: i32, chunk_z: i32) -> &str {
        self.cache.get_or_resolve(&self.resolver, chunk_x, chunk_z)
    }

    pub fn color_for_zone(&self, zone_name: &str) -> Color {
        colorizer::color_for(zone_name, self.config.theme.as_ref())
    }

    pub fn color_for_chunk(&mut self, chunk_x: i32, chunk_z: i32) -> Color {
        let name = self.cache.get_or_resolve(&self.resolver, chunk_x, chunk_z);
        colorizer::color_for(name, self.config.theme.as_ref())
    }

    /// Paint every chunk of `surface` with its zone's color. Returns the
    /// number of chunks painted.
    pub fn paint_terrain<S: TerrainSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let chunks = surface.chunks();
        for chunk in &chunks {
            let name = self.cache.get_or_resolve(&self.resolver, chunk.chunk_x, chunk.chunk_z);
            let color = colorizer::color_for(name, self.config.theme.as_ref());
            surface.color_terrain_uniform(chunk, name, color);
        }
        debug!(
            "Painted {} chunks ({} cached, {} resolved)",
            chunks.len(),
            self.cache.hits(),
            self.cache.misses()
        );
        chunks.len()
    }

    pub fn save(&self) -> ZoneState {
        ZoneState::from_zones(self.zones())
    }

    /// Restore zones from saved state. A state without zones leaves the
    /// current zones untouched and returns `false`.
    pub fn load(&mut self, state: &ZoneState) -> Result<bool> {
        let Some(zones) = &state.zones else {
            warn!("Saved zone state has no zones; keeping current layout");
            return Ok(false);
        };
        self.resolver = ZoneResolver::new(zones.clone())?;
        self.cache.clear();
        info!("Loaded {} zones from saved state", zones.len());
        Ok(true)
    }
}

impl ZoneLookup for ZoneManager {
    fn zone_at(&self, pos: &WorldPos) -> &Zone {
        self.resolver.resolve(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorizer::TerrainChunk;
    use crate::config::{GridLayout, LayoutMode};
    use crate::error::ZoneError;
    use crate::tracker::ZoneTracker;
    use crate::zone::ZoneKind;

    struct RecordingSurface {
        chunks: Vec<TerrainChunk>,
        painted: Vec<(i32, i32, String, Color)>,
    }

    impl RecordingSurface {
        fn square(n: i32, chunk_size: f32) -> Self {
            let mut chunks = Vec::new();
            for z in -n..n {
                for x in -n..n {
                    chunks.push(TerrainChunk {
                        chunk_x: x,
                        chunk_z: z,
                        position: WorldPos::flat(
                            x as f32 * chunk_size + chunk_size / 2.0,
                            z as f32 * chunk_size + chunk_size / 2.0,
                        ),
                    });
                }
            }
            Self {
                chunks,
                painted: Vec::new(),
            }
        }
    }

    impl TerrainSurface for RecordingSurface {
        fn chunks(&self) -> Vec<TerrainChunk> {
            self.chunks.clone()
        }

        fn color_terrain_uniform(&mut self, chunk: &TerrainChunk, zone_name: &str, color: Color) {
            self.painted.push((chunk.chunk_x, chunk.chunk_z, zone_name.to_string(), color));
        }
    }

    fn static_config() -> ZoneConfig {
        ZoneConfig {
            layout: LayoutMode::Static,
            ..ZoneConfig::default()
        }
    }

    #[test]
    fn test_static_world_queries() {
        let mut manager = ZoneManager::new(static_config()).unwrap();
        assert_eq!(manager.zone_at(&WorldPos::ORIGIN).name, "Terrant");
        assert_eq!(manager.zone_at(&WorldPos::flat(290.0, 0.0)).name, "Forest");
        assert_eq!(manager.zone_for_chunk(0, 0), "Terrant");
        assert_eq!(manager.color_for_chunk(0, 0), ZoneKind::Terrant.color());
    }

    #[test]
    fn test_paint_terrain_uses_cache_and_theme() {
        let mut config = static_config();
        let mut theme = ThemeColors::default();
        theme.zones.insert("Terrant".to_string(), Color::from_hex(0x010203));
        config.theme = Some(theme);

        let mut manager = ZoneManager::new(config).unwrap();
        let mut surface = RecordingSurface::square(4, 64.0);

        assert_eq!(manager.paint_terrain(&mut surface), 64);
        assert_eq!(manager.cache().misses(), 64);
        assert_eq!(surface.painted.len(), 64);

        let origin = surface
            .painted
            .iter()
            .find(|(x, z, _, _)| *x == 0 && *z == 0)
            .unwrap();
        assert_eq!(origin.2, "Terrant");
        assert_eq!(origin.3, Color::from_hex(0x010203));

        // Second pass is served from the cache
        manager.paint_terrain(&mut surface);
        assert_eq!(manager.cache().misses(), 64);
        assert_eq!(manager.cache().hits(), 64);
    }

    #[test]
    fn test_save_load_round_trip() {
        let config = ZoneConfig {
            layout: LayoutMode::Grid(GridLayout {
                range: 2,
                spacing: 300.0,
                seed: 11,
            }),
            ..ZoneConfig::default()
        };
        let original = ZoneManager::new(config).unwrap();
        let state = original.save();

        let mut restored = ZoneManager::new(static_config()).unwrap();
        assert!(restored.load(&state).unwrap());
        assert_eq!(restored.zones(), original.zones());
    }

    #[test]
    fn test_load_without_zones_is_noop() {
        let mut manager = ZoneManager::new(static_config()).unwrap();
        manager.zone_for_chunk(0, 0);
        let before = manager.zones().to_vec();

        assert!(!manager.load(&ZoneState::default()).unwrap());
        assert_eq!(manager.zones(), &before[..]);
        assert_eq!(manager.cache().len(), 1);
    }

    #[test]
    fn test_load_empty_zone_list_fails() {
        let mut manager = ZoneManager::new(static_config()).unwrap();
        let state = ZoneState { zones: Some(Vec::new()) };
        assert!(manager.load(&state).is_err());
        // Current zones survive the failed load
        assert_eq!(manager.zones().len(), registry::static_layout().len());
    }

    #[test]
    fn test_update_regenerates_and_clears_cache() {
        let mut manager = ZoneManager::new(static_config()).unwrap();
        manager.zone_for_chunk(1, 1);
        assert_eq!(manager.cache().len(), 1);

        let grid = ZoneConfig::default();
        manager.update(grid.clone()).unwrap();
        assert!(manager.cache().is_empty());
        assert_eq!(manager.zones(), &registry::generate(&grid.layout).unwrap()[..]);

        // Same layout, new chunk size: zones kept, cache rebuilt
        let before = manager.zones().to_vec();
        manager.zone_for_chunk(0, 0);
        manager.update(ZoneConfig {
            chunk_size: 16.0,
            ..grid
        })
        .unwrap();
        assert_eq!(manager.zones(), &before[..]);
        assert!(manager.cache().is_empty());
        assert_eq!(manager.cache().chunk_size(), 16.0);
    }

    #[test]
    fn test_tracker_follows_manager() {
        let manager = ZoneManager::new(static_config()).unwrap();
        let mut tracker = ZoneTracker::new();
        tracker.update(&WorldPos::ORIGIN, &manager);
        let change = tracker.update(&WorldPos::flat(-220.0, 80.0), &manager).unwrap();
        assert_eq!(change.to, "Desert");
    }

    #[test]
    fn test_regenerate_discards_loaded_zones() {
        let mut manager = ZoneManager::new(static_config()).unwrap();
        let ruins = Zone::of_kind(ZoneKind::Ruins, WorldPos::ORIGIN, 5.0);
        let single = ZoneState::from_zones(&[ruins]);
        manager.load(&single).unwrap();
        assert_eq!(manager.zones().len(), 1);

        manager.regenerate().unwrap();
        assert_eq!(manager.zones(), &registry::static_layout()[..]);
    }

    #[test]
    fn test_set_theme_recolors_without_re_resolving() {
        let mut manager = ZoneManager::new(static_config()).unwrap();
        assert_eq!(manager.color_for_chunk(0, 0), ZoneKind::Terrant.color());
        assert_eq!(manager.color_for_chunk(4, 0), ZoneKind::Forest.color());
        let (len, misses) = (manager.cache().len(), manager.cache().misses());

        let mut theme = ThemeColors::default();
        theme.zones.insert("Terrant".to_string(), Color::from_hex(0x0a0b0c));
        manager.set_theme(Some(theme));

        assert_eq!(manager.color_for_chunk(0, 0), Color::from_hex(0x0a0b0c));
        assert_eq!(manager.color_for_chunk(4, 0), ZoneKind::Forest.color());
        assert_eq!(manager.cache().len(), len);
        assert_eq!(manager.cache().misses(), misses);

        manager.set_theme(None);
        assert_eq!(manager.color_for_chunk(0, 0), ZoneKind::Terrant.color());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad_grid = ZoneConfig {
            layout: LayoutMode::Grid(GridLayout {
                range: i32::MAX,
                spacing: 1.0,
                seed: 0,
            }),
            ..ZoneConfig::default()
        };
        assert!(matches!(ZoneManager::new(bad_grid.clone()), Err(ZoneError::InvalidConfig(_))));

        let bad_chunks = ZoneConfig {
            chunk_size: 0.0,
            ..static_config()
        };
        assert!(matches!(
            ZoneManager::from_zones(registry::static_layout(), bad_chunks.clone()),
            Err(ZoneError::InvalidConfig(_))
        ));

        let mut manager = ZoneManager::new(static_config()).unwrap();
        manager.zone_for_chunk(0, 0);
        assert!(manager.update(bad_grid).is_err());
        assert!(manager.update(bad_chunks).is_err());
        // Failed updates keep the previous world
        assert_eq!(manager.config(), &static_config());
        assert_eq!(manager.zones(), &registry::static_layout()[..]);
        assert_eq!(manager.cache().len(), 1);
    }
}

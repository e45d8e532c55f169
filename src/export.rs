//! Zone map export
//!
//! Two renderings:
//! - per-chunk: a [`ChunkColorGrid`] is painted through the normal terrain
//!   path (cache + colorizer) and scaled up to pixels
//! - per-pixel: every pixel is resolved directly, rows in parallel

use std::collections::BTreeMap;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use log::info;
use rayon::prelude::*;

use crate::color::Color;
use crate::colorizer::{self, TerrainChunk, TerrainSurface};
use crate::config::ThemeColors;
use crate::error::Result;
use crate::resolver::ZoneResolver;
use crate::tilemap::Tilemap;
use crate::zone::{WorldPos, Zone};

const UNPAINTED: Color = Color::rgb(0, 0, 0);
const MARKER: Color = Color::rgb(255, 255, 255);

/// In-memory terrain made of square chunks, recording the paint each chunk gets.
pub struct ChunkColorGrid {
    chunk_size: f32,
    cells: Tilemap<Option<Color>>,
    zone_counts: BTreeMap<String, usize>,
}

impl ChunkColorGrid {
    /// Grid of `(2 * radius)^2` chunks centered on the origin.
    pub fn centered(radius: usize, chunk_size: f32) -> Self {
        Self {
            chunk_size,
            cells: Tilemap::centered(radius, None),
            zone_counts: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    /// Paint applied to a chunk, if any.
    pub fn color_at(&self, chunk_x: i32, chunk_z: i32) -> Option<Color> {
        let (x, y) = self.cells.cell_of(chunk_x, chunk_z)?;
        *self.cells.get(x, y)
    }

    /// How many chunks each zone name painted.
    pub fn zone_counts(&self) -> &BTreeMap<String, usize> {
        &self.zone_counts
    }

    /// Upscale to an image, `scale` pixels per chunk. Row 0 is the lowest z.
    pub fn to_image(&self, scale: u32) -> RgbImage {
        let scale = scale.max(1);
        let mut img: RgbImage =
            ImageBuffer::new(self.width() as u32 * scale, self.height() as u32 * scale);
        for (x, y, cell) in self.cells.iter() {
            let c = cell.unwrap_or(UNPAINTED);
            for py in 0..scale {
                for px in 0..scale {
                    let (ix, iy) = (x as u32 * scale + px, y as u32 * scale + py);
                    img.put_pixel(ix, iy, Rgb([c.r, c.g, c.b]));
                }
            }
        }
        img
    }
}

impl TerrainSurface for ChunkColorGrid {
    fn chunks(&self) -> Vec<TerrainChunk> {
        let half = self.chunk_size / 2.0;
        self.cells
            .iter()
            .map(|(x, y, _)| {
                let (chunk_x, chunk_z) = self.cells.chunk_of(x, y);
                TerrainChunk {
                    chunk_x,
                    chunk_z,
                    position: WorldPos::flat(
                        chunk_x as f32 * self.chunk_size + half,
                        chunk_z as f32 * self.chunk_size + half,
                    ),
                }
            })
            .collect()
    }

    fn color_terrain_uniform(&mut self, chunk: &TerrainChunk, zone_name: &str, color: Color) {
        if let Some((x, y)) = self.cells.cell_of(chunk.chunk_x, chunk.chunk_z) {
            if self.cells.get(x, y).is_none() {
                *self.zone_counts.entry(zone_name.to_string()).or_insert(0) += 1;
            }
            self.cells.set(x, y, Some(color));
        }
    }
}

/// Render the square `[-half_extent, half_extent]^2` at `pixels` x `pixels`,
/// resolving each pixel center directly.
pub fn render_zone_map(
    resolver: &ZoneResolver,
    theme: Option<&ThemeColors>,
    half_extent: f32,
    pixels: u32,
) -> RgbImage {
    let pixels = pixels.max(1);
    let step = 2.0 * half_extent / pixels as f32;

    let rows: Vec<Vec<Color>> = (0..pixels)
        .into_par_iter()
        .map(|py| {
            let z = -half_extent + (py as f32 + 0.5) * step;
            (0..pixels)
                .map(|px| {
                    let x = -half_extent + (px as f32 + 0.5) * step;
                    let zone = resolver.resolve(&WorldPos::flat(x, z));
                    colorizer::color_for(&zone.name, theme)
                })
                .collect()
        })
        .collect();

    let mut img: RgbImage = ImageBuffer::new(pixels, pixels);
    for (py, row) in rows.iter().enumerate() {
        for (px, c) in row.iter().enumerate() {
            img.put_pixel(px as u32, py as u32, Rgb([c.r, c.g, c.b]));
        }
    }
    img
}

/// Draw a small cross at each zone center that falls inside the image.
pub fn draw_zone_markers(img: &mut RgbImage, zones: &[Zone], half_extent: f32) {
    let (w, h) = img.dimensions();
    let to_pixel =
        |v: f32, size: u32| ((v + half_extent) / (2.0 * half_extent) * size as f32).floor() as i64;

    for zone in zones {
        let cx = to_pixel(zone.center.x, w);
        let cy = to_pixel(zone.center.z, h);
        for d in -2i64..=2 {
            for (x, y) in [(cx + d, cy), (cx, cy + d)] {
                if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                    img.put_pixel(x as u32, y as u32, Rgb([MARKER.r, MARKER.g, MARKER.b]));
                }
            }
        }
    }
}

pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)?;
    info!("Exported {}x{} zone map to {}", img.width(), img.height(), path.display());
    Ok(())
}

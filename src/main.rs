use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use journey_zones::export::{self, ChunkColorGrid};
use journey_zones::persistence;
use journey_zones::registry;
use journey_zones::{GridLayout, LayoutMode, Result, ThemeColors, WorldPos, ZoneConfig, ZoneManager};

#[derive(Parser, Debug)]
#[command(name = "journey_zones")]
#[command(about = "Generate, inspect and render world zone layouts")]
struct Args {
    /// JSON config file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World seed (uses random seed if not specified)
    #[arg(short, long, conflicts_with = "static_layout")]
    seed: Option<i64>,

    /// Grid cells span -range..=range on each axis
    #[arg(short, long, conflicts_with = "static_layout")]
    range: Option<i32>,

    /// World units between grid cell centers
    #[arg(long, conflicts_with = "static_layout")]
    spacing: Option<f32>,

    /// Use the fixed hand-authored layout instead of the seeded grid
    #[arg(long)]
    static_layout: bool,

    /// Terrain chunk edge length in world units
    #[arg(long)]
    chunk_size: Option<f32>,

    /// JSON theme color file
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Load zones from a saved state file instead of generating
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save zones to a state file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print the zone at a point, given as X,Z (repeatable)
    #[arg(long, value_parser = parse_point)]
    query: Vec<WorldPos>,

    /// Print every zone
    #[arg(long)]
    list: bool,

    /// Export a zone map PNG
    #[arg(long)]
    export_png: Option<PathBuf>,

    /// Render per chunk within this many chunks of the origin (0 = per pixel)
    #[arg(long, default_value = "0")]
    export_chunks: usize,

    /// Image size in pixels
    #[arg(long, default_value = "512")]
    pixels: u32,
}

fn parse_point(s: &str) -> std::result::Result<WorldPos, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Z but got {:?}", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad X in {:?}: {}", s, e))?;
    let z: f32 = z.trim().parse().map_err(|e| format!("bad Z in {:?}: {}", s, e))?;
    Ok(WorldPos::flat(x, z))
}

fn build_config(args: &Args) -> Result<ZoneConfig> {
    let mut config = match &args.config {
        Some(path) => ZoneConfig::load(path)?,
        None => ZoneConfig::default(),
    };

    // A static layout from the config file survives unless a grid flag is given
    let grid_flags = args.seed.is_some() || args.range.is_some() || args.spacing.is_some();
    if args.static_layout {
        config.layout = LayoutMode::Static;
    } else if grid_flags || matches!(config.layout, LayoutMode::Grid(_)) {
        let mut grid = match &config.layout {
            LayoutMode::Grid(grid) => grid.clone(),
            LayoutMode::Static => GridLayout::default(),
        };
        if let Some(seed) = args.seed {
            grid.seed = seed;
        } else if args.config.is_none() {
            grid.seed = rand::random::<u32>() as i64;
        }
        if let Some(range) = args.range {
            grid.range = range;
        }
        if let Some(spacing) = args.spacing {
            grid.spacing = spacing;
        }
        config.layout = LayoutMode::Grid(grid);
    }

    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(path) = &args.theme {
        config.theme = Some(ThemeColors::load(path)?);
    }
    Ok(config)
}

/// Half-width of the square that shows the whole layout.
fn view_extent(manager: &ZoneManager) -> f32 {
    match &manager.config().layout {
        LayoutMode::Grid(grid) => registry::grid_half_extent(grid),
        LayoutMode::Static => manager
            .zones()
            .iter()
            .map(|z| z.center.x.abs().max(z.center.z.abs()) + z.radius)
            .fold(1.0, f32::max),
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    match &config.layout {
        LayoutMode::Grid(grid) => println!(
            "Generating zones with seed: {} (range {}, spacing {:.1})",
            grid.seed, grid.range, grid.spacing
        ),
        LayoutMode::Static => println!("Using static zone layout"),
    }

    let mut manager = ZoneManager::new(config)?;

    if let Some(path) = &args.load {
        let state = persistence::load_state(path)?;
        if manager.load(&state)? {
            println!("Loaded {} zones from {}", manager.zones().len(), path.display());
        } else {
            warn!("{} has no zones, keeping generated layout", path.display());
        }
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for zone in manager.zones() {
        *counts.entry(zone.name.as_str()).or_insert(0) += 1;
    }
    println!("Created {} zones:", manager.zones().len());
    for (name, count) in &counts {
        println!("  {:<14} {}", name, count);
    }

    if args.list {
        for (i, zone) in manager.zones().iter().enumerate() {
            println!(
                "  [{:>3}] {:<14} center ({:>8.1}, {:>8.1}) radius {:>7.1} color {}",
                i, zone.name, zone.center.x, zone.center.z, zone.radius, zone.color
            );
        }
    }

    for point in &args.query {
        let zone = manager.zone_at(point);
        let color = manager.color_for_zone(&zone.name);
        println!(
            "({:.1}, {:.1}) -> {} (paint {})",
            point.x, point.z, zone.name, color
        );
    }

    if let Some(path) = &args.export_png {
        let extent = view_extent(&manager);
        let img = if args.export_chunks > 0 {
            let chunk_size = manager.config().chunk_size;
            let mut grid = ChunkColorGrid::centered(args.export_chunks, chunk_size);
            let painted = manager.paint_terrain(&mut grid);
            info!("Painted {} chunks", painted);
            let scale = (args.pixels / grid.width() as u32).max(1);
            grid.to_image(scale)
        } else {
            let mut img =
                export::render_zone_map(manager.resolver(), manager.theme(), extent, args.pixels);
            export::draw_zone_markers(&mut img, manager.zones(), extent);
            img
        };
        export::save_png(&img, path)?;
        println!("Exported zone map to {}", path.display());
    }

    if let Some(path) = &args.save {
        persistence::save_state(&manager.save(), path)?;
        println!("Saved {} zones to {}", manager.zones().len(), path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

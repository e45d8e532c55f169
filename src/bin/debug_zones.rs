//! Debug script to output zone layouts as ASCII with coverage stats

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

use journey_zones::registry::{generate_grid, grid_half_extent};
use journey_zones::{GridLayout, Result, WorldPos, ZoneKind, ZoneResolver};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEEDS: [i64; 4] = [0, 42, 1234, 99999];
const SAMPLES: usize = 20_000;
const ASCII_SIZE: usize = 64;

fn zone_char(name: &str) -> char {
    match ZoneKind::from_name(name) {
        Some(ZoneKind::Terrant) => '.',
        Some(ZoneKind::Forest) => 'f',
        Some(ZoneKind::Desert) => 'd',
        Some(ZoneKind::Mountains) => '^',
        Some(ZoneKind::Swamp) => 's',
        Some(ZoneKind::Ruins) => 'R',
        Some(ZoneKind::DarkSanctum) => 'X',
        None => '?',
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut file = File::create("zone_debug.txt")?;

    writeln!(file, "LEGEND:")?;
    writeln!(file, "  . = Terrant   f = Forest   d = Desert   ^ = Mountains")?;
    writeln!(file, "  s = Swamp     R = Ruins    X = Dark Sanctum")?;
    writeln!(file)?;

    for seed in SEEDS {
        let layout = GridLayout {
            seed,
            ..GridLayout::default()
        };
        let resolver = ZoneResolver::new(generate_grid(&layout)?)?;
        let extent = grid_half_extent(&layout);

        writeln!(
            file,
            "=== ZONE MAP seed={} range={} spacing={:.0} ({} zones) ===",
            seed,
            layout.range,
            layout.spacing,
            resolver.zones().len()
        )?;

        let step = 2.0 * extent / ASCII_SIZE as f32;
        for row in 0..ASCII_SIZE {
            let z = -extent + (row as f32 + 0.5) * step;
            let line: String = (0..ASCII_SIZE)
                .map(|col| {
                    let x = -extent + (col as f32 + 0.5) * step;
                    zone_char(&resolver.resolve(&WorldPos::flat(x, z)).name)
                })
                .collect();
            writeln!(file, "{}", line)?;
        }

        // Sample coverage: every point should be inside its resolved zone
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut fallbacks = 0usize;
        for _ in 0..SAMPLES {
            let p = WorldPos::flat(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent));
            let zone = resolver.resolve(&p);
            if !zone.contains(&p) {
                fallbacks += 1;
            }
            *counts.entry(zone.name.as_str()).or_insert(0) += 1;
        }

        writeln!(file)?;
        writeln!(
            file,
            "Coverage over {} samples ({} nearest-zone fallbacks):",
            SAMPLES, fallbacks
        )?;
        for (name, count) in &counts {
            writeln!(
                file,
                "  {:<14} {:>6} ({:.1}%)",
                name,
                count,
                100.0 * *count as f64 / SAMPLES as f64
            )?;
        }
        writeln!(file)?;

        println!("seed {}: {} zones, {} fallbacks", seed, resolver.zones().len(), fallbacks);
    }

    println!("Wrote zone_debug.txt");
    Ok(())
}

//! Noise dataset inspector — validates a GeoJSON dataset against the
//! calculator's input contract and prints summary statistics plus a text
//! Lden histogram. Optionally overlays one scenario to report the delta and
//! the people-improved count.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scenario_core::noise::NoiseSurface;
use scenario_core::paths::Path;
use scenario_core::ScenarioParams;

#[derive(Parser, Debug)]
#[command(name = "noise_report", about = "Noise dataset inspector")]
struct Args {
    /// GeoJSON FeatureCollection of Lden polygons.
    input: PathBuf,

    /// Histogram bin count.
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Overlay a scenario with this many movements per year.
    #[arg(long)]
    slots: Option<f64>,

    /// Assumption-set key for the overlay.
    #[arg(long, default_value = "balanced")]
    path: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let surface = NoiseSurface::from_geojson_str(&raw)
        .with_context(|| format!("cannot parse {}", args.input.display()))?;

    println!("Dataset: {}", args.input.display());
    println!("Polygons: {}", surface.len());

    let lden = surface.lden_values();
    println!(
        "With Lden: {} / without: {}",
        lden.len(),
        surface.len() - lden.len()
    );
    println!("Total inhabitants: {:.0}", surface.total_inhabitants());

    if let Some(bounds) = surface.bounds() {
        let (lat, lon) = bounds.center();
        println!(
            "Bounds: lon [{:.4}, {:.4}] lat [{:.4}, {:.4}] (center {:.4} N {:.4} E)",
            bounds.min_lon, bounds.max_lon, bounds.min_lat, bounds.max_lat, lat, lon
        );
    } else {
        println!("Bounds: none (no geometry with coordinates)");
    }

    if lden.is_empty() {
        println!("No Lden column: the dashboard will show empty noise visuals.");
    } else {
        print_stats_and_histogram(&lden, args.bins);
    }

    if let Some(slots) = args.slots {
        let params = ScenarioParams {
            slots,
            path: Path::from_key(&args.path),
            ..ScenarioParams::default()
        };
        let overlay = surface.simulate(&params);
        println!();
        println!(
            "Scenario overlay: slots={slots:.0} path={} → delta {:+.2} dB",
            params.path.key(),
            overlay.delta_db
        );
        println!("People improved (>1 dB quieter): {}", overlay.people_improved());
    }

    Ok(())
}

fn print_stats_and_histogram(values: &[f64], bins: usize) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    println!("Lden: min {min:.1} dB, mean {mean:.1} dB, max {max:.1} dB");

    let bins = bins.max(1);
    let width = ((max - min) / bins as f64).max(f64::EPSILON);
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(1).max(1);
    println!();
    for (i, &count) in counts.iter().enumerate() {
        let lo = min + i as f64 * width;
        let bar = "#".repeat(count * 50 / peak);
        println!("{lo:6.1} dB | {bar} {count}");
    }
}

//! Offline scenario runner: one computation per invocation, KPIs to stdout.
//! Useful for eyeballing coefficient changes without spinning up the
//! dashboard.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scenario_core::noise::NoiseSurface;
use scenario_core::paths::Path;
use scenario_core::{derive_assumptions, ScenarioCalculator, ScenarioParams};

#[derive(Parser, Debug)]
#[command(name = "scenario-cli", about = "Airport scenario KPI runner")]
struct Args {
    /// Movements per year.
    #[arg(long, default_value_t = 500_000.0)]
    slots: f64,

    /// Freight share of movements, 0-100.
    #[arg(long, default_value_t = 20.0)]
    freight: f64,

    /// Short-haul share of passenger movements, 0-100.
    #[arg(long, default_value_t = 50.0)]
    short: f64,

    /// Medium-haul share of passenger movements, 0-100.
    #[arg(long, default_value_t = 30.0)]
    medium: f64,

    /// Assumption-set key (unknown keys fall back to `balanced`).
    #[arg(long, default_value = "balanced")]
    path: String,

    /// GeoJSON noise dataset; enables the homes KPI.
    #[arg(long)]
    noise_dataset: Option<PathBuf>,

    /// Emit the full result as JSON instead of a text summary.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = ScenarioParams {
        slots: args.slots,
        freight_pct: args.freight,
        short_pct: args.short,
        medium_pct: args.medium,
        path: Path::from_key(&args.path),
    };

    let calculator = match &args.noise_dataset {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("cannot read noise dataset {}", path.display()))?;
            let surface = NoiseSurface::from_geojson_str(&raw)
                .with_context(|| format!("cannot parse noise dataset {}", path.display()))?;
            ScenarioCalculator::with_noise_surface(surface)
        }
        None => ScenarioCalculator::new(),
    };

    let result = calculator.compute(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let summary = derive_assumptions(&params);
    println!("Path: {} ({})", summary.path_label, summary.path);
    println!(
        "Haul split: short {:.0}% / medium {:.0}% / long {:.0}%",
        summary.short_pct, summary.medium_pct, summary.long_pct
    );
    println!(
        "Movements: {:.0} passenger, {:.0} freighter",
        summary.passenger_movements, summary.freighter_movements
    );
    println!();

    let k = &result.kpis;
    println!("Total passengers:       {:>10.2} million/yr", k.total_pax);
    println!("Belly cargo:            {:>10.3} Mt/yr", k.total_cargo_belly);
    println!("Freight cargo:          {:>10.3} Mt/yr", k.total_cargo_freight);
    println!("Added value (direct):   {:>10.1} €m/yr", k.va_direct);
    println!("Added value (indirect): {:>10.1} €m/yr", k.va_indirect);
    println!("Jobs (direct):          {:>10}", k.jobs_direct);
    println!("Jobs (indirect):        {:>10}", k.jobs_indirect);
    match &args.noise_dataset {
        Some(_) => println!("People improved >1 dB:  {:>10}", k.homes),
        None => println!("People improved >1 dB:  (no noise dataset)"),
    }

    println!();
    println!("{:<14} {:>12} {:>12} {:>14} {:>10}", "Segment", "Pax (M)", "Cargo (Mt)", "Value (€m)", "Jobs");
    for row in &result.segments.rows {
        println!(
            "{:<14} {:>12.2} {:>12.3} {:>14.1} {:>10.0}",
            row.segment.label(),
            row.pax,
            row.cargo,
            row.added_value,
            row.jobs
        );
    }

    Ok(())
}

//! Synthetic 2020–2100 baseline trajectories and their lever damping.
//!
//! Baselines are a linear ramp plus seeded Gaussian jitter (seed 42, series
//! drawn in a fixed order so reruns are identical). Levers damp each series
//! with a bounded tanh factor, so no setting can flip a trajectory negative.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::ClimateLevers;

pub const START_YEAR: i32 = 2020;
pub const END_YEAR: i32 = 2100;

const JITTER_SD: f64 = 0.02;

/// The four dashboard time series over 2020–2100 inclusive.
#[derive(Debug, Clone, Serialize)]
pub struct Trajectories {
    pub years: Vec<i32>,
    /// Temperature Δ trajectory, °C-equivalent index.
    pub temperature: Vec<f64>,
    /// Emissions index, GtCO₂-equivalent.
    pub emissions: Vec<f64>,
    /// Final energy demand index, EJ-equivalent.
    pub energy: Vec<f64>,
    /// Average energy price index, $/MWh-equivalent.
    pub price: Vec<f64>,
}

/// One baseline series: linear ramp 1.0 → 1.0 + 0.4·scale with Gaussian
/// jitter of σ = 0.02·scale.
fn baseline(rng: &mut StdRng, scale: f64) -> Vec<f64> {
    let n = (END_YEAR - START_YEAR + 1) as usize;
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            let ramp = 1.0 + 0.4 * scale * t;
            ramp + gaussian(rng) * JITTER_SD * scale
        })
        .collect()
}

/// Standard normal draw (Box–Muller).
fn gaussian(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-12);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Build the undamped baselines. Draw order matches the dashboard's module
/// initialisation order: emissions, temperature, energy, price.
pub fn baseline_series() -> Trajectories {
    let mut rng = StdRng::seed_from_u64(42);
    let emissions = baseline(&mut rng, 2.0);
    let temperature = baseline(&mut rng, 1.2);
    let energy = baseline(&mut rng, 1.5);
    let price = baseline(&mut rng, 0.8);

    Trajectories {
        years: (START_YEAR..=END_YEAR).collect(),
        temperature,
        emissions,
        energy,
        price,
    }
}

impl Trajectories {
    /// Damp each series by its lever-driven tanh factor.
    pub fn apply_levers(&mut self, l: &ClimateLevers, mitigation: f64) {
        scale_series(&mut self.emissions, 1.0 - 0.5 * (mitigation / 10.0).tanh());
        scale_series(&mut self.temperature, 1.0 - 0.25 * (mitigation / 12.0).tanh());

        let efficiency = l.vehicle_efficiency + l.industrial_efficiency + l.heat_pumps;
        scale_series(&mut self.energy, 1.0 - 0.1 * (efficiency / 50.0).tanh());

        let price_pressure = l.co2_price + l.renewables_share;
        scale_series(&mut self.price, 1.0 - 0.15 * (price_pressure / 300.0).tanh());
    }
}

fn scale_series(series: &mut [f64], factor: f64) {
    for v in series {
        *v *= factor;
    }
}

//! Climate/energy lever page model.
//!
//! Eleven sliders → four headline KPIs, four damped 2020–2100 trajectories,
//! a primary-energy mix, and a levelized cost breakdown. The relationships
//! are the dashboard's illustrative toy math, kept verbatim; only the
//! baseline jitter is reproduced with this crate's own seeded RNG.

pub mod trajectory;

use serde::{Deserialize, Serialize};

use trajectory::{baseline_series, Trajectories};

/// Climate lever settings. Defaults mirror the dashboard's reset button.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateLevers {
    /// CO₂ price, $/t.
    pub co2_price: f64,
    /// Renewables share of supply, %.
    pub renewables_share: f64,
    /// Nuclear buildout, GW.
    pub nuclear_gw: f64,
    /// EV share of vehicle sales, %.
    pub ev_share: f64,
    /// Vehicle efficiency gain, +%.
    pub vehicle_efficiency: f64,
    /// Heat pump adoption, %.
    pub heat_pumps: f64,
    /// Industrial efficiency gain, +%.
    pub industrial_efficiency: f64,
    /// Re/afforestation, GtCO₂.
    pub reforestation_gt: f64,
    /// Direct air capture scale, GtCO₂.
    pub dac_gt: f64,
    /// GDP growth to 2050, %.
    pub gdp_growth: f64,
    /// Population in 2100, billions.
    pub population_bn: f64,
}

impl Default for ClimateLevers {
    fn default() -> Self {
        Self {
            co2_price: 50.0,
            renewables_share: 35.0,
            nuclear_gw: 80.0,
            ev_share: 40.0,
            vehicle_efficiency: 10.0,
            heat_pumps: 25.0,
            industrial_efficiency: 15.0,
            reforestation_gt: 2.5,
            dac_gt: 0.5,
            gdp_growth: 2.5,
            population_bn: 9.7,
        }
    }
}

/// Headline KPI cards. Each carries its display floor already applied.
#[derive(Debug, Clone, Serialize)]
pub struct ClimateKpis {
    /// Peak warming by 2100, °C (floor 1.0).
    pub warming_c: f64,
    /// 2050 emissions, GtCO₂/yr (floor 0).
    pub emissions_2050_gt: f64,
    /// 2050 final energy demand, EJ (floor 200).
    pub energy_2050_ej: f64,
    /// Average 2030s energy price, $/MWh (floor 20).
    pub price_2030s: f64,
}

/// Primary energy mix in percent. Nuclear is capped at 40 (GW / 8);
/// fossil absorbs the remainder, floored at 0.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyMix {
    pub fossil: f64,
    pub renewables: f64,
    pub nuclear: f64,
}

/// Levelized cost breakdown, $/MWh per item.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub capex: f64,
    pub fuel: f64,
    pub carbon: f64,
    pub o_and_m: f64,
}

/// Full output of the climate page computation.
#[derive(Debug, Clone, Serialize)]
pub struct ClimateResult {
    pub kpis: ClimateKpis,
    pub mix: EnergyMix,
    pub costs: CostBreakdown,
    pub trajectories: Trajectories,
}

pub fn compute_kpis(l: &ClimateLevers) -> ClimateKpis {
    let warming = 3.2
        - 0.004 * l.co2_price
        - 0.008 * l.renewables_share
        - 0.001 * l.nuclear_gw
        - 0.005 * l.ev_share
        - 0.004 * l.heat_pumps
        - 0.004 * l.industrial_efficiency
        - 0.03 * l.reforestation_gt
        - 0.04 * l.dac_gt
        + 0.08 * (l.gdp_growth - 2.5)
        + 0.06 * (l.population_bn - 9.7);

    let em2050 = 40.0
        - 0.08 * l.co2_price
        - 0.25 * l.renewables_share
        - 0.05 * l.nuclear_gw
        - 0.2 * l.ev_share
        - 0.15 * l.heat_pumps
        - 0.2 * l.industrial_efficiency
        - 0.9 * l.reforestation_gt
        - 1.2 * l.dac_gt
        + 0.4 * (l.gdp_growth - 2.5)
        + 0.3 * (l.population_bn - 9.7);

    let energy2050 = 450.0 + 0.8 * (l.gdp_growth - 2.5) * 100.0
        - 1.0 * l.industrial_efficiency
        - 0.6 * l.vehicle_efficiency
        - 0.5 * l.heat_pumps;

    let price2030 = 110.0 - 0.05 * l.co2_price - 0.2 * l.renewables_share + 0.04 * l.nuclear_gw;

    ClimateKpis {
        warming_c: warming.max(1.0),
        emissions_2050_gt: em2050.max(0.0),
        energy_2050_ej: energy2050.max(200.0),
        price_2030s: price2030.max(20.0),
    }
}

/// Combined mitigation strength feeding the trajectory damping.
pub fn mitigation(l: &ClimateLevers) -> f64 {
    0.002 * l.co2_price
        + 0.004 * l.renewables_share
        + 0.0008 * l.nuclear_gw
        + 0.003 * l.ev_share
        + 0.003 * l.heat_pumps
        + 0.003 * l.industrial_efficiency
        + 0.02 * l.reforestation_gt
        + 0.03 * l.dac_gt
}

pub fn energy_mix(l: &ClimateLevers) -> EnergyMix {
    let nuclear = (l.nuclear_gw / 8.0).min(40.0);
    EnergyMix {
        fossil: (100.0 - l.renewables_share - nuclear).max(0.0),
        renewables: l.renewables_share,
        nuclear,
    }
}

pub fn cost_breakdown(l: &ClimateLevers) -> CostBreakdown {
    CostBreakdown {
        capex: 40.0,
        fuel: 35.0 - 0.2 * l.renewables_share,
        carbon: (30.0 - 0.1 * l.co2_price).max(0.0),
        o_and_m: 12.0,
    }
}

/// Run the full climate page computation.
pub fn compute_climate(levers: &ClimateLevers) -> ClimateResult {
    let mut series = baseline_series();
    series.apply_levers(levers, mitigation(levers));

    ClimateResult {
        kpis: compute_kpis(levers),
        mix: energy_mix(levers),
        costs: cost_breakdown(levers),
        trajectories: series,
    }
}

//! Climate page figures: trajectory lines, energy mix pie, cost bars.

use serde::Serialize;

use crate::climate::ClimateResult;

use super::figure::{BarChart, Figure, LineChart, PieChart};

fn line(title: &str, y_title: &str, years: &[i32], values: &[f64]) -> Figure {
    Figure::Line(LineChart {
        title: title.to_string(),
        y_title: y_title.to_string(),
        years: years.to_vec(),
        values: values.to_vec(),
    })
}

/// All figures of the climate page for one lever setting.
#[derive(Debug, Clone, Serialize)]
pub struct ClimateFigures {
    pub temperature: Figure,
    pub emissions: Figure,
    pub energy: Figure,
    pub price: Figure,
    pub mix: Figure,
    pub costs: Figure,
}

pub fn climate_figures(result: &ClimateResult) -> ClimateFigures {
    let t = &result.trajectories;
    ClimateFigures {
        temperature: line("Temperature Trajectory", "Temperature Δ (°C)", &t.years, &t.temperature),
        emissions: line("Emissions", "Emissions", &t.years, &t.emissions),
        energy: line("Final Energy Demand", "Energy Demand (EJ)", &t.years, &t.energy),
        price: line("Avg. Energy Price", "Energy Price ($/MWh)", &t.years, &t.price),
        mix: Figure::Pie(PieChart {
            title: "Primary Energy Mix (toy)".to_string(),
            labels: vec!["Fossil".to_string(), "Renewables".to_string(), "Nuclear".to_string()],
            values: vec![result.mix.fossil, result.mix.renewables, result.mix.nuclear],
        }),
        costs: Figure::Bar(BarChart {
            title: "Levelized Cost Breakdown (toy)".to_string(),
            y_title: "$/MWh".to_string(),
            categories: vec![
                "Capex".to_string(),
                "Fuel".to_string(),
                "Carbon".to_string(),
                "O&M".to_string(),
            ],
            values: vec![
                result.costs.capex,
                result.costs.fuel,
                result.costs.carbon,
                result.costs.o_and_m,
            ],
        }),
    }
}

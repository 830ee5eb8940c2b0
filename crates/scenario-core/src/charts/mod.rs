//! Chart descriptor builders: pure mappers from calculator output (and the
//! static noise dataset) to serializable figures. Degenerate input always
//! yields a valid placeholder figure.

pub mod climate;
pub mod economy;
pub mod figure;
pub mod noise;
pub mod traffic;

use serde::Serialize;

use crate::calculator::ScenarioResult;
use crate::noise::NoiseSurface;
use crate::params::ScenarioParams;

pub use climate::{climate_figures, ClimateFigures};
pub use economy::{employment_fig, value_fig};
pub use figure::Figure;
pub use noise::{noise_choropleth_fig, noise_hist_fig};
pub use traffic::{cargo_fig, pax_fig};

/// All scenario-page figures for one recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioFigures {
    pub pax: Figure,
    pub cargo: Figure,
    pub value: Figure,
    pub employment: Figure,
    pub noise_map: Figure,
    pub noise_hist: Figure,
}

/// Build every figure the scenario page shows. The noise figures degrade to
/// placeholders when no dataset was loaded.
pub fn scenario_figures(
    result: &ScenarioResult,
    surface: Option<&NoiseSurface>,
    params: &ScenarioParams,
) -> ScenarioFigures {
    let overlay = surface.map(|s| s.simulate(params));
    let empty = NoiseSurface::default();
    let surface = surface.unwrap_or(&empty);

    ScenarioFigures {
        pax: pax_fig(&result.segments),
        cargo: cargo_fig(&result.segments),
        value: value_fig(&result.segments),
        employment: employment_fig(&result.segments),
        noise_map: noise_choropleth_fig(surface, overlay.as_ref()),
        noise_hist: noise_hist_fig(surface, overlay.as_ref()),
    }
}

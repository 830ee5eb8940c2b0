//! WASM bindings for the dashboard frontend.
//!
//! The frontend loads the noise dataset once at startup, then calls
//! `compute`/`scenario_figures` on every slider change and the climate
//! endpoints on the second page. All results cross the boundary as plain
//! JS objects via serde.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use scenario_core::charts;
use scenario_core::climate::{compute_climate, ClimateLevers};
use scenario_core::noise::NoiseSurface;
use scenario_core::paths::Path;
use scenario_core::{derive_assumptions, ScenarioCalculator, ScenarioParams};

thread_local! {
    // The single read-only dataset shared by all invocations.
    static NOISE_SURFACE: RefCell<Option<NoiseSurface>> = const { RefCell::new(None) };
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn params_from_js(params: JsValue) -> Result<ScenarioParams, JsValue> {
    serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid scenario params: {e}")))
}

/// Load the GeoJSON noise dataset. Call once at startup; replaces any
/// previously loaded dataset.
#[wasm_bindgen]
pub fn set_noise_dataset(geojson: &str) -> Result<usize, JsValue> {
    let surface = NoiseSurface::from_geojson_str(geojson)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let count = surface.len();
    NOISE_SURFACE.with(|cell| *cell.borrow_mut() = Some(surface));
    Ok(count)
}

/// Run the scenario calculator; returns `{ kpis, segments }`.
#[wasm_bindgen]
pub fn compute(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    NOISE_SURFACE.with(|cell| {
        let result = match cell.borrow().clone() {
            Some(surface) => ScenarioCalculator::with_noise_surface(surface).compute(&params),
            None => ScenarioCalculator::new().compute(&params),
        };
        to_js(&result)
    })
}

/// Build every scenario-page figure for the given parameters.
#[wasm_bindgen]
pub fn scenario_figures(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    NOISE_SURFACE.with(|cell| {
        let guard = cell.borrow();
        let result = match guard.as_ref() {
            Some(surface) => {
                ScenarioCalculator::with_noise_surface(surface.clone()).compute(&params)
            }
            None => ScenarioCalculator::new().compute(&params),
        };
        let figures = charts::scenario_figures(&result, guard.as_ref(), &params);
        to_js(&figures)
    })
}

/// Resolved assumption-set snapshot for the assumptions table.
#[wasm_bindgen]
pub fn assumptions(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    to_js(&derive_assumptions(&params))
}

/// Run the climate-lever page computation; returns
/// `{ kpis, mix, costs, trajectories }`.
#[wasm_bindgen]
pub fn climate_compute(levers: JsValue) -> Result<JsValue, JsValue> {
    let levers: ClimateLevers = serde_wasm_bindgen::from_value(levers)
        .map_err(|e| JsValue::from_str(&format!("Invalid climate levers: {e}")))?;
    to_js(&compute_climate(&levers))
}

/// Build the climate-page figures for the given levers.
#[wasm_bindgen]
pub fn climate_figures(levers: JsValue) -> Result<JsValue, JsValue> {
    let levers: ClimateLevers = serde_wasm_bindgen::from_value(levers)
        .map_err(|e| JsValue::from_str(&format!("Invalid climate levers: {e}")))?;
    to_js(&charts::climate_figures(&compute_climate(&levers)))
}

/// Default slider values for the reset button.
#[wasm_bindgen]
pub fn defaults() -> Result<JsValue, JsValue> {
    to_js(&ScenarioParams::default())
}

/// `[{ value, label }]` options for the path dropdown.
#[wasm_bindgen]
pub fn path_options() -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct PathOption {
        value: &'static str,
        label: &'static str,
    }
    let options: Vec<PathOption> = Path::ALL
        .into_iter()
        .map(|p| PathOption {
            value: p.key(),
            label: p.label(),
        })
        .collect();
    to_js(&options)
}

//! Scenario Explorer computation core.
//!
//! Everything the dashboard derives from its sliders lives here: the airport
//! scenario calculator (movements → segment table → KPIs), the noise-surface
//! overlay, the chart descriptor builders, and the climate-lever page model.
//! The embedding layer (WASM bindings or CLI) owns all I/O and rendering.

pub mod calculator;
pub mod charts;
pub mod climate;
pub mod noise;
pub mod params;
pub mod paths;
pub mod segments;

pub use calculator::{derive_assumptions, AssumptionSummary, Kpis, ScenarioCalculator, ScenarioResult};
pub use params::ScenarioParams;
pub use paths::Path;
pub use segments::{Segment, SegmentRow, SegmentTable};

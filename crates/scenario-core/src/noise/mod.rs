//! Static noise-exposure dataset and its per-scenario overlay.
//!
//! The dataset is a GeoJSON FeatureCollection of Lden contour polygons with
//! optional baseline `Lden` and inhabitant counts. It is loaded once by the
//! embedding layer and never mutated; each scenario derives a fresh
//! `lden_sim`/`diff` overlay from it.

pub mod geojson;
pub mod simulate;
pub mod surface;

pub use geojson::DatasetError;
pub use surface::{Bounds, NoiseOverlay, NoisePolygon, NoiseSurface, OverlayRow};

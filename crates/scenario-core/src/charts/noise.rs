//! Noise choropleth and Lden distribution histogram.

use crate::noise::{Bounds, NoiseOverlay, NoiseSurface};

use super::figure::{ChoroplethFeature, ChoroplethMap, Figure, HistogramChart, MapCenter};

/// Fallback map view when the dataset gives us no bounds.
const DEFAULT_CENTER: MapCenter = MapCenter {
    lat: 52.308,
    lon: 4.764,
};
const DEFAULT_ZOOM: u8 = 9;
const MAP_OPACITY: f64 = 0.6;

/// Crude fit-the-box zoom heuristic from the dataset bounds.
fn center_and_zoom(bounds: Option<Bounds>) -> (MapCenter, u8) {
    let Some(b) = bounds else {
        return (DEFAULT_CENTER, DEFAULT_ZOOM);
    };
    let (lat, lon) = b.center();
    let center = MapCenter { lat, lon };
    let area = b.area();
    let zoom = if area <= 0.0 {
        10
    } else if area < 0.01 {
        11
    } else if area < 0.1 {
        10
    } else if area < 1.0 {
        9
    } else {
        8
    };
    (center, zoom)
}

/// Choropleth of the simulated noise surface.
///
/// Colour column preference: `lden_sim`, then `diff`; a missing overlay or
/// an empty dataset yields a placeholder map at the default view.
pub fn noise_choropleth_fig(surface: &NoiseSurface, overlay: Option<&NoiseOverlay>) -> Figure {
    let title = "Noise map (Lden)".to_string();

    let placeholder = |color_label: &str| {
        Figure::Choropleth(ChoroplethMap {
            title: title.clone(),
            color_label: color_label.to_string(),
            features: Vec::new(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            opacity: MAP_OPACITY,
        })
    };

    if surface.is_empty() {
        return placeholder("lden_sim");
    }
    let Some(overlay) = overlay else {
        return placeholder("lden_sim");
    };

    // lden_sim and diff are absent together (no baseline Lden column), so
    // the fallback only matters when every feature lacks a baseline.
    let (color_label, pick): (&str, fn(&crate::noise::OverlayRow) -> Option<f64>) =
        if overlay.rows.iter().any(|r| r.lden_sim.is_some()) {
            ("lden_sim", |r| r.lden_sim)
        } else {
            ("diff", |r| r.diff)
        };

    let features: Vec<ChoroplethFeature> = surface
        .polygons
        .iter()
        .zip(&overlay.rows)
        .enumerate()
        .filter_map(|(i, (polygon, row))| {
            pick(row).map(|value| ChoroplethFeature {
                id: i.to_string(),
                geometry: polygon.geometry.clone(),
                value,
                inhabitants: row.inhabitants,
            })
        })
        .collect();

    if features.is_empty() {
        return placeholder(color_label);
    }

    let (center, zoom) = center_and_zoom(surface.bounds());
    Figure::Choropleth(ChoroplethMap {
        title,
        color_label: color_label.to_string(),
        features,
        center,
        zoom,
        opacity: MAP_OPACITY,
    })
}

/// Distribution of the scenario's Lden change (falls back to the baseline
/// Lden distribution when no overlay is available).
pub fn noise_hist_fig(surface: &NoiseSurface, overlay: Option<&NoiseOverlay>) -> Figure {
    let (x_title, values) = match overlay {
        Some(o) if !o.diff_values().is_empty() => ("diff".to_string(), o.diff_values()),
        _ => ("Lden".to_string(), surface.lden_values()),
    };
    Figure::Histogram(HistogramChart {
        title: "Distribution of Lden".to_string(),
        x_title,
        values,
        nbins: 40,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ScenarioParams;
    use serde_json::json;

    fn sample_surface() -> NoiseSurface {
        NoiseSurface::from_geojson_value(&json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[4.70, 52.28], [4.80, 52.28], [4.80, 52.34], [4.70, 52.28]]]
                    },
                    "properties": {"Lden": 65.0, "aantalInwoners": 1500}
                },
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[4.60, 52.20], [4.66, 52.20], [4.66, 52.25], [4.60, 52.20]]]
                    },
                    "properties": {"Lden": 52.0, "aantalInwoners": 4000}
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn empty_surface_yields_placeholder_map_at_default_view() {
        let fig = noise_choropleth_fig(&NoiseSurface::default(), None);
        let Figure::Choropleth(map) = fig else {
            panic!("expected a choropleth");
        };
        assert!(map.features.is_empty());
        assert_eq!(map.zoom, DEFAULT_ZOOM);
        assert!((map.center.lat - 52.308).abs() < 1e-12);
    }

    #[test]
    fn choropleth_colors_by_lden_sim() {
        let surface = sample_surface();
        let overlay = surface.simulate(&ScenarioParams {
            slots: 250_000.0,
            ..ScenarioParams::default()
        });
        let Figure::Choropleth(map) = noise_choropleth_fig(&surface, Some(&overlay)) else {
            panic!("expected a choropleth");
        };
        assert_eq!(map.color_label, "lden_sim");
        assert_eq!(map.features.len(), 2);
        // Quieter scenario: simulated levels sit below the baselines.
        assert!(map.features[0].value < 65.0);
        assert_eq!(map.features[0].inhabitants, Some(1500.0));
        // Union box is 0.2° × 0.14° ≈ 0.028 square degrees → zoom 10.
        assert_eq!(map.zoom, 10);
    }

    #[test]
    fn histogram_prefers_diff_and_falls_back_to_lden() {
        let surface = sample_surface();
        let overlay = surface.simulate(&ScenarioParams::default());

        let Figure::Histogram(h) = noise_hist_fig(&surface, Some(&overlay)) else {
            panic!("expected a histogram");
        };
        assert_eq!(h.x_title, "diff");
        assert_eq!(h.values.len(), 2);
        assert_eq!(h.nbins, 40);

        let Figure::Histogram(h) = noise_hist_fig(&surface, None) else {
            panic!("expected a histogram");
        };
        assert_eq!(h.x_title, "Lden");
        assert_eq!(h.values, vec![65.0, 52.0]);
    }

    #[test]
    fn histogram_on_empty_surface_is_a_placeholder() {
        let fig = noise_hist_fig(&NoiseSurface::default(), None);
        assert!(fig.is_placeholder());
    }
}

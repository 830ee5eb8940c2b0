//! Per-scenario Lden overlay.
//!
//! Stand-in acoustics, shaped so the dashboard behaves sensibly: the
//! source-level delta follows 10·log10 of the loudness-weighted movement
//! count relative to the default scenario, plus the path's fleet offset.
//! Each polygon then sees that delta scaled by how exposed it already is,
//! so the loudest contours move the most and the histogram keeps spread.

#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::params::ScenarioParams;
use crate::paths::coeffs_for_path;
use crate::segments::Segment;

use super::surface::{NoiseOverlay, NoiseSurface, OverlayRow};

/// Source-level delta is capped to a plausible band.
const MAX_DELTA_DB: f64 = 15.0;
/// Exposure scaling ramps from 0 at this baseline Lden...
const EXPOSURE_FLOOR_DB: f64 = 40.0;
/// ...to 1 over this many dB.
const EXPOSURE_RANGE_DB: f64 = 25.0;

/// Relative acoustic weight of one movement in each segment. Heavier,
/// longer-range aircraft are louder per movement.
fn loudness_weight(segment: Segment) -> f64 {
    match segment {
        Segment::ShortHaul => 1.0,
        Segment::MediumHaul => 1.3,
        Segment::LongHaul => 2.0,
        Segment::Freighter => 2.5,
    }
}

/// Loudness-weighted yearly movement count of a scenario.
fn movement_energy(params: &ScenarioParams) -> f64 {
    let norm = params.normalized();
    let split = norm.haul_split();
    let pax = norm.passenger_movements();

    pax * split.short * loudness_weight(Segment::ShortHaul)
        + pax * split.medium * loudness_weight(Segment::MediumHaul)
        + pax * split.long * loudness_weight(Segment::LongHaul)
        + norm.freighter_movements() * loudness_weight(Segment::Freighter)
}

/// Source-level Lden delta of `params` against the default scenario, in dB.
pub fn delta_db(params: &ScenarioParams) -> f64 {
    let baseline = movement_energy(&ScenarioParams::default());
    let ratio = movement_energy(params) / baseline;
    // ratio → dB; a shut-down airport (ratio 0) pins at the negative cap.
    let movement_db = 10.0 * ratio.max(1e-6).log10();
    let fleet_db = coeffs_for_path(params.normalized().path).fleet_noise_db;
    (movement_db + fleet_db).clamp(-MAX_DELTA_DB, MAX_DELTA_DB)
}

impl NoiseSurface {
    /// Derive the `lden_sim`/`diff` columns for one scenario.
    ///
    /// Polygons without a baseline Lden get empty simulated columns; their
    /// inhabitants are never counted as improved.
    pub fn simulate(&self, params: &ScenarioParams) -> NoiseOverlay {
        let delta = delta_db(params);

        let map_row = |p: &super::surface::NoisePolygon| -> OverlayRow {
            match p.lden {
                Some(lden) => {
                    let exposure =
                        ((lden - EXPOSURE_FLOOR_DB) / EXPOSURE_RANGE_DB).clamp(0.0, 1.0);
                    let diff = delta * exposure;
                    OverlayRow {
                        lden: Some(lden),
                        lden_sim: Some(lden + diff),
                        diff: Some(diff),
                        inhabitants: p.inhabitants,
                    }
                }
                None => OverlayRow {
                    lden: None,
                    lden_sim: None,
                    diff: None,
                    inhabitants: p.inhabitants,
                },
            }
        };

        #[cfg(feature = "threading")]
        let rows: Vec<OverlayRow> = self.polygons.par_iter().map(map_row).collect();
        #[cfg(not(feature = "threading"))]
        let rows: Vec<OverlayRow> = self.polygons.iter().map(map_row).collect();

        NoiseOverlay { delta_db: delta, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::Path;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn surface_with_lden(values: &[(f64, f64)]) -> NoiseSurface {
        NoiseSurface {
            polygons: values
                .iter()
                .map(|&(lden, inhabitants)| super::super::surface::NoisePolygon {
                    geometry: json!({"type": "Polygon", "coordinates": []}),
                    lden: Some(lden),
                    inhabitants: Some(inhabitants),
                    bbox: None,
                })
                .collect(),
        }
    }

    #[test]
    fn default_scenario_is_the_zero_point() {
        assert_relative_eq!(delta_db(&ScenarioParams::default()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn more_movements_raise_lden() {
        let louder = ScenarioParams {
            slots: 750_000.0,
            ..ScenarioParams::default()
        };
        assert!(delta_db(&louder) > 0.0);

        let quieter = ScenarioParams {
            slots: 250_000.0,
            ..ScenarioParams::default()
        };
        assert!(delta_db(&quieter) < 0.0);
    }

    #[test]
    fn zero_slots_pin_at_negative_cap() {
        let closed = ScenarioParams {
            slots: 0.0,
            ..ScenarioParams::default()
        };
        assert_eq!(delta_db(&closed), -MAX_DELTA_DB);
    }

    #[test]
    fn quiet_fleet_path_lowers_delta_at_equal_traffic() {
        let sustainable = ScenarioParams {
            path: Path::SustainableTransition,
            ..ScenarioParams::default()
        };
        assert!(delta_db(&sustainable) < 0.0);
    }

    #[test]
    fn long_haul_mix_is_louder_than_short_haul_mix() {
        let short_heavy = ScenarioParams {
            short_pct: 100.0,
            medium_pct: 0.0,
            ..ScenarioParams::default()
        };
        let long_heavy = ScenarioParams {
            short_pct: 0.0,
            medium_pct: 0.0,
            ..ScenarioParams::default()
        };
        assert!(delta_db(&long_heavy) > delta_db(&short_heavy));
    }

    #[test]
    fn shut_down_airport_improves_exposed_polygons() {
        let surface = surface_with_lden(&[(70.0, 2_000.0), (58.0, 5_000.0), (45.0, 10_000.0)]);
        let closed = ScenarioParams {
            slots: 0.0,
            ..ScenarioParams::default()
        };
        let overlay = surface.simulate(&closed);
        assert_eq!(overlay.delta_db, -MAX_DELTA_DB);
        // 70 and 58 dB polygons improve well past 1 dB; the 45 dB polygon
        // sits near the exposure floor and still clears the threshold.
        assert_eq!(overlay.people_improved(), 17_000);
        for row in &overlay.rows {
            assert!(row.diff.unwrap() < 0.0);
        }
    }

    #[test]
    fn unchanged_scenario_improves_nobody() {
        let surface = surface_with_lden(&[(70.0, 2_000.0), (58.0, 5_000.0)]);
        let overlay = surface.simulate(&ScenarioParams::default());
        assert_eq!(overlay.people_improved(), 0);
        for row in &overlay.rows {
            assert_relative_eq!(row.diff.unwrap(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn louder_contours_move_more() {
        let surface = surface_with_lden(&[(70.0, 0.0), (50.0, 0.0)]);
        let quieter = ScenarioParams {
            slots: 250_000.0,
            ..ScenarioParams::default()
        };
        let overlay = surface.simulate(&quieter);
        let d70 = overlay.rows[0].diff.unwrap();
        let d50 = overlay.rows[1].diff.unwrap();
        assert!(d70 < d50 && d50 < 0.0, "d70={d70} d50={d50}");
    }
}

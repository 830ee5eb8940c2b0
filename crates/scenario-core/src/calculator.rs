//! Scenario calculator: slider inputs → segment table → aggregate KPIs.
//!
//! Pure arithmetic, linear in `slots`. There is deliberately no error
//! channel: every input is clamped or defaulted during normalization, an
//! unknown path key already fell back to the default assumption set, and a
//! missing noise dataset degrades the `homes` KPI to zero.

use serde::Serialize;

use crate::noise::NoiseSurface;
use crate::params::{NormalizedParams, ScenarioParams};
use crate::paths::{coeffs_for_path, PathCoeffs};
use crate::segments::{Segment, SegmentRow, SegmentTable};

// ── Per-segment aircraft and economy assumptions ─────────────────────────────
//
// Stand-in magnitudes (the dashboard's model is illustrative, not validated):
// pax per movement ≈ seats × load factor; belly tonnage grows with range;
// added value per million pax and jobs per million pax grow with haul length.

struct SegmentAssumptions {
    /// Passengers per movement (0 for freighters).
    pax_per_movement: f64,
    /// Cargo tonnes per movement (belly hold, or full payload for freighters).
    cargo_per_movement: f64,
    /// Direct added value, €m per million passengers.
    va_per_mpax: f64,
    /// Direct jobs per million passengers.
    jobs_per_mpax: f64,
}

/// Direct added value, €m per million tonnes of cargo (all segments).
const VA_PER_MTONNE: f64 = 180.0;
/// Direct jobs per million tonnes of cargo (all segments).
const JOBS_PER_MTONNE: f64 = 2_500.0;

fn assumptions_for(segment: Segment) -> SegmentAssumptions {
    match segment {
        Segment::ShortHaul => SegmentAssumptions {
            pax_per_movement: 140.0,
            cargo_per_movement: 0.5,
            va_per_mpax: 40.0,
            jobs_per_mpax: 900.0,
        },
        Segment::MediumHaul => SegmentAssumptions {
            pax_per_movement: 200.0,
            cargo_per_movement: 2.0,
            va_per_mpax: 70.0,
            jobs_per_mpax: 1_100.0,
        },
        Segment::LongHaul => SegmentAssumptions {
            pax_per_movement: 280.0,
            cargo_per_movement: 8.0,
            va_per_mpax: 120.0,
            jobs_per_mpax: 1_400.0,
        },
        Segment::Freighter => SegmentAssumptions {
            pax_per_movement: 0.0,
            cargo_per_movement: 60.0,
            va_per_mpax: 0.0,
            jobs_per_mpax: 0.0,
        },
    }
}

// ── Result types ──────────────────────────────────────────────────────────────

/// Aggregate KPIs shown in the dashboard's card strip.
#[derive(Debug, Clone, Serialize)]
pub struct Kpis {
    /// People whose Lden drops by more than 1 dB. Zero without a noise dataset.
    pub homes: u64,
    /// Direct added value, €m/yr.
    pub va_direct: f64,
    /// Indirect added value, €m/yr.
    pub va_indirect: f64,
    pub jobs_direct: u64,
    pub jobs_indirect: u64,
    /// Full-freighter cargo, million tonnes/yr.
    pub total_cargo_freight: f64,
    /// Belly cargo on passenger flights, million tonnes/yr.
    pub total_cargo_belly: f64,
    /// Total passengers, millions/yr.
    pub total_pax: f64,
}

/// Full output of one scenario computation.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub kpis: Kpis,
    pub segments: SegmentTable,
}

// ── Calculator ────────────────────────────────────────────────────────────────

/// The scenario computation entry point. Optionally holds the read-only
/// noise dataset so `compute` can derive the `homes` KPI; everything else is
/// a pure function of the parameters.
#[derive(Default)]
pub struct ScenarioCalculator {
    noise_surface: Option<NoiseSurface>,
}

impl ScenarioCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the static noise dataset loaded by the embedding layer.
    pub fn with_noise_surface(surface: NoiseSurface) -> Self {
        Self {
            noise_surface: Some(surface),
        }
    }

    pub fn noise_surface(&self) -> Option<&NoiseSurface> {
        self.noise_surface.as_ref()
    }

    /// Run the full scenario computation.
    ///
    /// Stages:
    ///   1. Normalize inputs (clamp, derive long-haul share).
    ///   2. Allocate movements across segments from the freight and haul splits.
    ///   3. Convert movements to pax/cargo/value/jobs per segment.
    ///   4. Sum into aggregate KPIs, applying the path's indirect ratios.
    ///   5. Overlay the noise surface for the `homes` KPI, if present.
    pub fn compute(&self, params: &ScenarioParams) -> ScenarioResult {
        let norm = params.normalized();
        let coeffs = coeffs_for_path(norm.path);

        let segments = build_segment_table(&norm, &coeffs);

        let va_direct = segments.total_added_value();
        let jobs_direct = segments.total_jobs();

        let homes = match &self.noise_surface {
            Some(surface) => surface.simulate(params).people_improved(),
            None => 0,
        };

        ScenarioResult {
            kpis: Kpis {
                homes,
                va_direct,
                va_indirect: va_direct * coeffs.indirect_va_ratio,
                jobs_direct: jobs_direct.round() as u64,
                jobs_indirect: (jobs_direct * coeffs.indirect_jobs_ratio).round() as u64,
                total_cargo_freight: segments.freight_cargo(),
                total_cargo_belly: segments.belly_cargo(),
                total_pax: segments.total_pax(),
            },
            segments,
        }
    }
}

fn build_segment_table(norm: &NormalizedParams, coeffs: &PathCoeffs) -> SegmentTable {
    let split = norm.haul_split();
    let pax_movements = norm.passenger_movements();

    let rows = Segment::ALL
        .into_iter()
        .map(|segment| {
            let movements = match segment {
                Segment::ShortHaul => pax_movements * split.short,
                Segment::MediumHaul => pax_movements * split.medium,
                Segment::LongHaul => pax_movements * split.long,
                Segment::Freighter => norm.freighter_movements(),
            };
            let a = assumptions_for(segment);

            // Millions of passengers and million tonnes per year.
            let pax = movements * a.pax_per_movement / 1e6;
            let cargo = movements * a.cargo_per_movement / 1e6;

            let added_value =
                (pax * a.va_per_mpax + cargo * VA_PER_MTONNE) * coeffs.va_multiplier;
            let jobs =
                (pax * a.jobs_per_mpax + cargo * JOBS_PER_MTONNE) * coeffs.jobs_multiplier;

            SegmentRow {
                segment,
                pax,
                cargo,
                added_value,
                jobs,
            }
        })
        .collect();

    SegmentTable { rows }
}

// ── Assumptions snapshot ──────────────────────────────────────────────────────

/// Resolved-assumption snapshot for the dashboard's assumptions table.
/// Computed analytically, without running the segment pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct AssumptionSummary {
    pub path: &'static str,
    pub path_label: &'static str,
    pub va_multiplier: f64,
    pub indirect_va_ratio: f64,
    pub jobs_multiplier: f64,
    pub indirect_jobs_ratio: f64,
    pub fleet_noise_db: f64,
    pub passenger_movements: f64,
    pub freighter_movements: f64,
    pub short_pct: f64,
    pub medium_pct: f64,
    pub long_pct: f64,
}

/// Resolve ScenarioParams → AssumptionSummary.
pub fn derive_assumptions(params: &ScenarioParams) -> AssumptionSummary {
    let norm = params.normalized();
    let coeffs = coeffs_for_path(norm.path);

    AssumptionSummary {
        path: norm.path.key(),
        path_label: norm.path.label(),
        va_multiplier: coeffs.va_multiplier,
        indirect_va_ratio: coeffs.indirect_va_ratio,
        jobs_multiplier: coeffs.jobs_multiplier,
        indirect_jobs_ratio: coeffs.indirect_jobs_ratio,
        fleet_noise_db: coeffs.fleet_noise_db,
        passenger_movements: norm.passenger_movements(),
        freighter_movements: norm.freighter_movements(),
        short_pct: norm.short_pct,
        medium_pct: norm.medium_pct,
        long_pct: norm.long_pct,
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::Path;
    use approx::assert_relative_eq;

    fn params(slots: f64, freight: f64, short: f64, medium: f64, path: Path) -> ScenarioParams {
        ScenarioParams {
            slots,
            freight_pct: freight,
            short_pct: short,
            medium_pct: medium,
            path,
        }
    }

    #[test]
    fn zero_slots_zero_everything() {
        let result = ScenarioCalculator::new().compute(&params(0.0, 20.0, 50.0, 30.0, Path::Balanced));
        assert_eq!(result.kpis.total_pax, 0.0);
        assert_eq!(result.kpis.total_cargo_freight, 0.0);
        assert_eq!(result.kpis.total_cargo_belly, 0.0);
        assert_eq!(result.kpis.va_direct, 0.0);
        assert_eq!(result.kpis.jobs_direct, 0);
        assert_eq!(result.kpis.homes, 0);
    }

    /// 1M slots, 20% freight, 50/30 haul split: long-haul gets the remaining 20%.
    #[test]
    fn worked_example_allocates_movements() {
        let calc = ScenarioCalculator::new();
        let result = calc.compute(&params(1_000_000.0, 20.0, 50.0, 30.0, Path::Balanced));

        // 800k passenger movements split 50/30/20; 200k freighter movements.
        let short = result.segments.get(Segment::ShortHaul).unwrap();
        let long = result.segments.get(Segment::LongHaul).unwrap();
        let freighter = result.segments.get(Segment::Freighter).unwrap();

        assert_relative_eq!(short.pax, 400_000.0 * 140.0 / 1e6, max_relative = 1e-12);
        assert_relative_eq!(long.pax, 160_000.0 * 280.0 / 1e6, max_relative = 1e-12);
        assert_eq!(freighter.pax, 0.0);
        assert_relative_eq!(freighter.cargo, 200_000.0 * 60.0 / 1e6, max_relative = 1e-12);
    }

    #[test]
    fn totals_scale_linearly_with_slots() {
        let calc = ScenarioCalculator::new();
        let base = calc.compute(&params(1_000_000.0, 20.0, 50.0, 30.0, Path::Balanced));
        let doubled = calc.compute(&params(2_000_000.0, 20.0, 50.0, 30.0, Path::Balanced));

        assert_relative_eq!(doubled.kpis.total_pax, 2.0 * base.kpis.total_pax, max_relative = 1e-12);
        assert_relative_eq!(
            doubled.kpis.total_cargo_belly,
            2.0 * base.kpis.total_cargo_belly,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            doubled.kpis.total_cargo_freight,
            2.0 * base.kpis.total_cargo_freight,
            max_relative = 1e-12
        );
        assert_relative_eq!(doubled.kpis.va_direct, 2.0 * base.kpis.va_direct, max_relative = 1e-12);
    }

    /// Every KPI stays non-negative across a grid of inputs, hostile ones included.
    #[test]
    fn kpis_non_negative_for_all_inputs() {
        let calc = ScenarioCalculator::new();
        for &slots in &[0.0, 1.0, 250_000.0, 2_000_000.0, -50.0, f64::NAN] {
            for &freight in &[0.0, 20.0, 100.0, 180.0, -30.0] {
                for &short in &[0.0, 50.0, 100.0] {
                    for &medium in &[0.0, 30.0, 100.0] {
                        for path in Path::ALL {
                            let result = calc.compute(&params(slots, freight, short, medium, path));
                            let k = &result.kpis;
                            assert!(
                                k.total_pax >= 0.0
                                    && k.total_cargo_belly >= 0.0
                                    && k.total_cargo_freight >= 0.0
                                    && k.va_direct >= 0.0
                                    && k.va_indirect >= 0.0,
                                "negative KPI for slots={slots} freight={freight} \
                                 short={short} medium={medium} path={path:?}"
                            );
                            for row in &result.segments.rows {
                                assert!(row.pax >= 0.0 && row.cargo >= 0.0);
                                assert!(row.added_value >= 0.0 && row.jobs >= 0.0);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Unknown path keys carry the default coefficients all the way through.
    #[test]
    fn unknown_path_matches_balanced_output() {
        let calc = ScenarioCalculator::new();
        let via_key = ScenarioParams {
            path: Path::from_key("hyperloop_first"),
            ..params(1_000_000.0, 20.0, 50.0, 30.0, Path::Balanced)
        };
        let balanced = calc.compute(&params(1_000_000.0, 20.0, 50.0, 30.0, Path::Balanced));
        let fallback = calc.compute(&via_key);
        assert_eq!(fallback.kpis.va_direct, balanced.kpis.va_direct);
        assert_eq!(fallback.kpis.jobs_direct, balanced.kpis.jobs_direct);
    }

    #[test]
    fn growth_path_raises_value_and_jobs() {
        let calc = ScenarioCalculator::new();
        let balanced = calc.compute(&params(1_000_000.0, 20.0, 50.0, 30.0, Path::Balanced));
        let growth = calc.compute(&params(1_000_000.0, 20.0, 50.0, 30.0, Path::EconomicGrowth));
        assert!(growth.kpis.va_direct > balanced.kpis.va_direct);
        assert!(growth.kpis.jobs_direct > balanced.kpis.jobs_direct);
        // The traffic volumes themselves are path-independent.
        assert_eq!(growth.kpis.total_pax, balanced.kpis.total_pax);
    }

    #[test]
    fn assumption_summary_resolves_without_pipeline() {
        let summary = derive_assumptions(&params(1_000_000.0, 20.0, 50.0, 30.0, Path::SustainableTransition));
        assert_eq!(summary.path, "sustainable_transition");
        assert_eq!(summary.long_pct, 20.0);
        assert_eq!(summary.passenger_movements, 800_000.0);
        assert!(summary.fleet_noise_db < 0.0);
    }
}

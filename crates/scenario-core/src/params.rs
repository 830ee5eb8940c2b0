use serde::{Deserialize, Serialize};

use crate::paths::Path;

/// User-facing scenario inputs (4 sliders + the path dropdown).
/// Defaults mirror the dashboard's reset button.
///
/// Raw slider values may be anything the UI sends; [`ScenarioParams::normalized`]
/// is the only form the calculator consumes. Missing fields deserialize to 0
/// (the dashboard's "no value yet" state), never to an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Movements per year.
    #[serde(default)]
    pub slots: f64,
    /// Freight share of movements, 0-100. Passenger share is the remainder.
    #[serde(default)]
    pub freight_pct: f64,
    /// Short-haul share of passenger movements, 0-100.
    #[serde(default)]
    pub short_pct: f64,
    /// Medium-haul share of passenger movements, 0-100.
    #[serde(default)]
    pub medium_pct: f64,
    /// Named assumption set. Unknown keys fall back to the default path.
    #[serde(default)]
    pub path: Path,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            slots: 500_000.0,
            freight_pct: 20.0,
            short_pct: 50.0,
            medium_pct: 30.0,
            path: Path::Balanced,
        }
    }
}

/// Haul distribution as fractions summing to 1 (or all zero for a degenerate
/// split, which cannot happen after [`normalize_split`] but keeps the type
/// honest for direct construction in tests).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HaulSplit {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

/// Scenario inputs after clamping and haul-split derivation. This is the
/// calculator's input contract: slots ≥ 0, percentages in [0, 100],
/// short + medium + long == 100.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NormalizedParams {
    pub slots: f64,
    pub freight_pct: f64,
    pub short_pct: f64,
    pub medium_pct: f64,
    pub long_pct: f64,
    pub path: Path,
}

impl ScenarioParams {
    /// Build from optional raw inputs; `None` (and non-finite noise from the
    /// wire) becomes 0, an absent path key becomes the default path.
    pub fn from_raw(
        slots: Option<f64>,
        freight_pct: Option<f64>,
        short_pct: Option<f64>,
        medium_pct: Option<f64>,
        path: Option<&str>,
    ) -> Self {
        Self {
            slots: slots.unwrap_or(0.0),
            freight_pct: freight_pct.unwrap_or(0.0),
            short_pct: short_pct.unwrap_or(0.0),
            medium_pct: medium_pct.unwrap_or(0.0),
            path: path.map(Path::from_key).unwrap_or_default(),
        }
    }

    /// Clamp all inputs into range and derive the long-haul share.
    ///
    /// long = 100 − short − medium, floored at 0. When short + medium exceed
    /// 100 after clamping, medium yields to short so the split still sums to
    /// exactly 100. No input can make this fail.
    pub fn normalized(&self) -> NormalizedParams {
        let slots = finite_or_zero(self.slots).max(0.0);
        let freight_pct = clamp_pct(self.freight_pct);
        let short_pct = clamp_pct(self.short_pct);
        let medium_pct = clamp_pct(self.medium_pct).min(100.0 - short_pct);
        let long_pct = (100.0 - short_pct - medium_pct).max(0.0);

        NormalizedParams {
            slots,
            freight_pct,
            short_pct,
            medium_pct,
            long_pct,
            path: self.path,
        }
    }
}

impl NormalizedParams {
    /// Freight share of all movements as a fraction.
    pub fn freight_share(&self) -> f64 {
        self.freight_pct / 100.0
    }

    /// Haul distribution of passenger movements as fractions.
    pub fn haul_split(&self) -> HaulSplit {
        HaulSplit {
            short: self.short_pct / 100.0,
            medium: self.medium_pct / 100.0,
            long: self.long_pct / 100.0,
        }
    }

    /// Yearly passenger movements.
    pub fn passenger_movements(&self) -> f64 {
        self.slots * (1.0 - self.freight_share())
    }

    /// Yearly freighter movements.
    pub fn freighter_movements(&self) -> f64 {
        self.slots * self.freight_share()
    }
}

fn clamp_pct(v: f64) -> f64 {
    finite_or_zero(v).clamp(0.0, 100.0)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

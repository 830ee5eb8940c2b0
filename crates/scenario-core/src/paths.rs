use serde::{Deserialize, Deserializer, Serialize};

/// Named assumption set selectable in the dashboard's "Path" dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Path {
    Balanced,
    EconomicGrowth,
    SustainableTransition,
}

impl Default for Path {
    fn default() -> Self {
        Path::Balanced
    }
}

impl Path {
    pub const ALL: [Path; 3] = [
        Path::Balanced,
        Path::EconomicGrowth,
        Path::SustainableTransition,
    ];

    /// Stable string key used in JSON payloads and the dropdown `value`.
    pub fn key(self) -> &'static str {
        match self {
            Path::Balanced => "balanced",
            Path::EconomicGrowth => "economic_growth",
            Path::SustainableTransition => "sustainable_transition",
        }
    }

    /// Human-readable dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            Path::Balanced => "Balanced",
            Path::EconomicGrowth => "Economic growth",
            Path::SustainableTransition => "Sustainable transition",
        }
    }

    /// Parse a dropdown key. Unknown keys fall back to the default path
    /// rather than failing; the calculator has no error channel by design.
    pub fn from_key(key: &str) -> Path {
        Path::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .unwrap_or_default()
    }
}

// Manual impl so unknown keys degrade to the default instead of a serde error.
impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Path::from_key(&key))
    }
}

/// Economic and environmental coefficients of one assumption set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PathCoeffs {
    /// Multiplier on per-segment added value.
    pub va_multiplier: f64,
    /// Indirect added value as a ratio of direct added value.
    pub indirect_va_ratio: f64,
    /// Multiplier on per-segment direct jobs.
    pub jobs_multiplier: f64,
    /// Indirect jobs as a ratio of direct jobs.
    pub indirect_jobs_ratio: f64,
    /// Fleet noise offset in dB applied on top of the movement-driven Lden
    /// delta (negative = quieter aircraft mix).
    pub fleet_noise_db: f64,
}

pub fn coeffs_for_path(path: Path) -> PathCoeffs {
    match path {
        Path::Balanced => PathCoeffs {
            va_multiplier: 1.0,
            indirect_va_ratio: 0.85,
            jobs_multiplier: 1.0,
            indirect_jobs_ratio: 1.30,
            fleet_noise_db: 0.0,
        },
        Path::EconomicGrowth => PathCoeffs {
            va_multiplier: 1.15,
            indirect_va_ratio: 1.00,
            jobs_multiplier: 1.10,
            indirect_jobs_ratio: 1.45,
            fleet_noise_db: 0.5,
        },
        Path::SustainableTransition => PathCoeffs {
            va_multiplier: 0.95,
            indirect_va_ratio: 0.80,
            jobs_multiplier: 0.92,
            indirect_jobs_ratio: 1.20,
            fleet_noise_db: -2.5,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_balanced() {
        assert_eq!(Path::from_key("economic_growth"), Path::EconomicGrowth);
        assert_eq!(Path::from_key("no_such_path"), Path::Balanced);
        assert_eq!(Path::from_key(""), Path::Balanced);
    }

    #[test]
    fn deserialize_unknown_key_does_not_fail() {
        let p: Path = serde_json::from_str(r#""flying_cars""#).unwrap();
        assert_eq!(p, Path::Balanced);
        let p: Path = serde_json::from_str(r#""sustainable_transition""#).unwrap();
        assert_eq!(p, Path::SustainableTransition);
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for path in Path::ALL {
            assert_eq!(Path::from_key(path.key()), path);
        }
    }

    /// The sustainable fleet must be the quiet one; growth must not be quieter
    /// than balanced. The noise overlay's sign conventions rest on this.
    #[test]
    fn fleet_offsets_are_ordered() {
        let quiet = coeffs_for_path(Path::SustainableTransition).fleet_noise_db;
        let base = coeffs_for_path(Path::Balanced).fleet_noise_db;
        let loud = coeffs_for_path(Path::EconomicGrowth).fleet_noise_db;
        assert!(quiet < base && base <= loud);
    }
}

use serde::Serialize;

/// Geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Box area in square degrees; the map-zoom heuristic keys off this.
    pub fn area(&self) -> f64 {
        (self.max_lon - self.min_lon) * (self.max_lat - self.min_lat)
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_lon: self.min_lon.min(other.min_lon),
            min_lat: self.min_lat.min(other.min_lat),
            max_lon: self.max_lon.max(other.max_lon),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }
}

/// One polygon of the noise dataset. The geometry is kept as raw GeoJSON so
/// the frontend's choropleth receives it untouched.
#[derive(Debug, Clone, Serialize)]
pub struct NoisePolygon {
    pub geometry: serde_json::Value,
    /// Baseline day-evening-night noise level in dB, when the column exists.
    pub lden: Option<f64>,
    /// People living inside the polygon, when the column exists.
    pub inhabitants: Option<f64>,
    #[serde(skip)]
    pub bbox: Option<Bounds>,
}

/// The read-only noise dataset.
#[derive(Debug, Clone, Default)]
pub struct NoiseSurface {
    pub polygons: Vec<NoisePolygon>,
}

impl NoiseSurface {
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Union of all polygon bounding boxes, None for an empty dataset.
    pub fn bounds(&self) -> Option<Bounds> {
        self.polygons
            .iter()
            .filter_map(|p| p.bbox)
            .reduce(|a, b| a.union(&b))
    }

    /// Baseline Lden values of the polygons that carry one.
    pub fn lden_values(&self) -> Vec<f64> {
        self.polygons.iter().filter_map(|p| p.lden).collect()
    }

    /// Total inhabitants across polygons that carry the column.
    pub fn total_inhabitants(&self) -> f64 {
        self.polygons.iter().filter_map(|p| p.inhabitants).sum()
    }
}

/// Per-polygon simulated columns for one scenario, aligned index-for-index
/// with `NoiseSurface::polygons`.
#[derive(Debug, Clone, Serialize)]
pub struct NoiseOverlay {
    /// Source-level Lden delta in dB before per-polygon exposure scaling.
    pub delta_db: f64,
    pub rows: Vec<OverlayRow>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverlayRow {
    pub lden: Option<f64>,
    /// Simulated Lden under the scenario; None when the polygon has no baseline.
    pub lden_sim: Option<f64>,
    /// `lden_sim − lden`, negative = quieter.
    pub diff: Option<f64>,
    pub inhabitants: Option<f64>,
}

impl NoiseOverlay {
    /// People whose exposure improves by more than 1 dB under the scenario.
    pub fn people_improved(&self) -> u64 {
        self.rows
            .iter()
            .filter(|r| matches!(r.diff, Some(d) if d < -1.0))
            .filter_map(|r| r.inhabitants)
            .sum::<f64>()
            .round()
            .max(0.0) as u64
    }

    /// The diff column, for the histogram builder.
    pub fn diff_values(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.diff).collect()
    }
}

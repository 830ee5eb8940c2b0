use serde::Serialize;
use serde_json::Value;

/// Serializable chart descriptor. The frontend owns the actual rendering;
/// these carry exactly the data and hints its plotting layer needs. A
/// "placeholder" figure is a valid descriptor with empty data, never an
/// error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Bar(BarChart),
    Histogram(HistogramChart),
    Line(LineChart),
    Pie(PieChart),
    Choropleth(ChoroplethMap),
}

impl Figure {
    /// True when the figure carries no data points (placeholder state).
    pub fn is_placeholder(&self) -> bool {
        match self {
            Figure::Bar(f) => f.values.is_empty(),
            Figure::Histogram(f) => f.values.is_empty(),
            Figure::Line(f) => f.values.is_empty(),
            Figure::Pie(f) => f.values.is_empty(),
            Figure::Choropleth(f) => f.features.is_empty(),
        }
    }
}

/// Category bar chart (one bar per traffic segment, cost item, ...).
#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub title: String,
    pub y_title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl BarChart {
    pub fn placeholder(title: &str, y_title: &str) -> Self {
        Self {
            title: title.to_string(),
            y_title: y_title.to_string(),
            categories: Vec::new(),
            values: Vec::new(),
        }
    }
}

/// Raw-value histogram; the frontend bins with `nbins`.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramChart {
    pub title: String,
    pub x_title: String,
    pub values: Vec<f64>,
    pub nbins: u32,
}

/// Yearly line chart.
#[derive(Debug, Clone, Serialize)]
pub struct LineChart {
    pub title: String,
    pub y_title: String,
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

/// One colourable polygon of the choropleth.
#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethFeature {
    /// Stable feature id (row index as string, as the frontend expects).
    pub id: String,
    /// Raw GeoJSON geometry, passed through untouched.
    pub geometry: Value,
    /// Value of the active colour column.
    pub value: f64,
    /// Hover data: people living in the polygon.
    pub inhabitants: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethMap {
    pub title: String,
    /// Name of the colour column ("lden_sim" or "diff").
    pub color_label: String,
    pub features: Vec<ChoroplethFeature>,
    pub center: MapCenter,
    pub zoom: u8,
    pub opacity: f64,
}

//! GeoJSON ingestion for the noise dataset.
//!
//! Input contract: a FeatureCollection of polygon features with optional
//! numeric properties `Lden` (baseline noise level) and an inhabitant count
//! under `aantalInwoners`, `households`, or `inhabitants`. Features without
//! geometry are skipped; absent properties are not errors — the chart layer
//! degrades to empty visuals instead.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::surface::{Bounds, NoisePolygon, NoiseSurface};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a GeoJSON FeatureCollection, found `{0}`")]
    NotAFeatureCollection(String),
}

#[derive(Deserialize, Default)]
struct FeatureProps {
    #[serde(alias = "Lden")]
    lden: Option<f64>,
    #[serde(alias = "aantalInwoners", alias = "households")]
    inhabitants: Option<f64>,
}

impl NoiseSurface {
    pub fn from_geojson_str(raw: &str) -> Result<NoiseSurface, DatasetError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_geojson_value(&value)
    }

    pub fn from_geojson_value(value: &Value) -> Result<NoiseSurface, DatasetError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("<missing type>");
        if kind != "FeatureCollection" {
            return Err(DatasetError::NotAFeatureCollection(kind.to_string()));
        }

        let features = value
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let polygons = features
            .iter()
            .filter_map(|feature| {
                let geometry = feature.get("geometry")?;
                if geometry.is_null() {
                    return None;
                }
                let props: FeatureProps = feature
                    .get("properties")
                    .cloned()
                    .and_then(|p| serde_json::from_value(p).ok())
                    .unwrap_or_default();

                Some(NoisePolygon {
                    bbox: geometry_bounds(geometry),
                    geometry: geometry.clone(),
                    lden: props.lden,
                    inhabitants: props.inhabitants,
                })
            })
            .collect();

        Ok(NoiseSurface { polygons })
    }
}

/// Bounding box of a GeoJSON geometry, from a recursive walk of its
/// coordinate arrays. Leaf positions are `[lon, lat, ...]` number arrays.
fn geometry_bounds(geometry: &Value) -> Option<Bounds> {
    let coords = geometry.get("coordinates")?;
    let mut bounds: Option<Bounds> = None;
    walk_positions(coords, &mut bounds);
    bounds
}

fn walk_positions(value: &Value, bounds: &mut Option<Bounds>) {
    let Some(arr) = value.as_array() else {
        return;
    };
    // A position is an array whose first two entries are numbers.
    if let (Some(lon), Some(lat)) = (
        arr.first().and_then(Value::as_f64),
        arr.get(1).and_then(Value::as_f64),
    ) {
        let point = Bounds {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        };
        *bounds = Some(match bounds {
            Some(b) => b.union(&point),
            None => point,
        });
        return;
    }
    for inner in arr {
        walk_positions(inner, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[4.70, 52.28], [4.80, 52.28], [4.80, 52.34], [4.70, 52.34], [4.70, 52.28]]]
                },
                "properties": {"Lden": 62.5, "aantalInwoners": 1250}
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[4.60, 52.20], [4.66, 52.20], [4.66, 52.25], [4.60, 52.25], [4.60, 52.20]]]
                },
                "properties": {"households": 400}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"Lden": 70.0}
            }
        ]
    }"#;

    #[test]
    fn parses_features_and_property_aliases() {
        let surface = NoiseSurface::from_geojson_str(SAMPLE).unwrap();
        // The null-geometry feature is skipped.
        assert_eq!(surface.len(), 2);
        assert_eq!(surface.polygons[0].lden, Some(62.5));
        assert_eq!(surface.polygons[0].inhabitants, Some(1250.0));
        assert_eq!(surface.polygons[1].lden, None);
        assert_eq!(surface.polygons[1].inhabitants, Some(400.0));
    }

    #[test]
    fn computes_polygon_and_dataset_bounds() {
        let surface = NoiseSurface::from_geojson_str(SAMPLE).unwrap();
        let bbox = surface.polygons[0].bbox.unwrap();
        assert_eq!(bbox.min_lon, 4.70);
        assert_eq!(bbox.max_lat, 52.34);

        let all = surface.bounds().unwrap();
        assert_eq!(all.min_lon, 4.60);
        assert_eq!(all.max_lon, 4.80);
    }

    #[test]
    fn rejects_non_feature_collections() {
        let err = NoiseSurface::from_geojson_str(r#"{"type": "Polygon", "coordinates": []}"#)
            .unwrap_err();
        assert!(matches!(err, DatasetError::NotAFeatureCollection(k) if k == "Polygon"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = NoiseSurface::from_geojson_str("{not json").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn empty_feature_list_is_a_valid_empty_surface() {
        let surface =
            NoiseSurface::from_geojson_str(r#"{"type": "FeatureCollection", "features": []}"#)
                .unwrap();
        assert!(surface.is_empty());
    }
}

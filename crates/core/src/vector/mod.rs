//! Vector data structures: features, attribute values, feature collections

use geo_types::{Geometry, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Attribute value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl AttributeValue {
    /// Convert to a JSON value for GeoJSON property serialization
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AttributeValue::Null => serde_json::Value::Null,
            AttributeValue::Bool(b) => serde_json::Value::Bool(*b),
            AttributeValue::Int(i) => serde_json::Value::from(*i),
            AttributeValue::Float(f) => serde_json::Value::from(*f),
            AttributeValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }

    /// Convert from a JSON value read out of a GeoJSON property map
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(b) => AttributeValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AttributeValue::Int(i)
                } else {
                    AttributeValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => AttributeValue::String(s.clone()),
            other => AttributeValue::String(other.to_string()),
        }
    }
}

/// A geographic feature with geometry and attributes.
///
/// Attributes are kept in a sorted map so that serialized output has a
/// stable field order.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Feature geometry
    pub geometry: Option<Geometry<f64>>,
    /// Feature attributes
    pub properties: BTreeMap<String, AttributeValue>,
}

impl Feature {
    /// Create a new feature with geometry
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self {
            geometry: Some(geometry),
            properties: BTreeMap::new(),
        }
    }

    /// Set an attribute
    pub fn set_property(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.properties.insert(key.into(), value);
    }

    /// Get an attribute
    pub fn get_property(&self, key: &str) -> Option<&AttributeValue> {
        self.properties.get(key)
    }

    /// The feature's geometry as a point, if it is one
    pub fn point(&self) -> Option<Point<f64>> {
        match self.geometry {
            Some(Geometry::Point(p)) => Some(p),
            _ => None,
        }
    }

    /// The feature's geometry as a polygon, if it is one
    pub fn polygon(&self) -> Option<&Polygon<f64>> {
        match &self.geometry {
            Some(Geometry::Polygon(p)) => Some(p),
            _ => None,
        }
    }
}

/// Human-readable name of a geometry variant, for diagnostics
pub fn geometry_type_name(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Collection of features, analogous to a single vector layer.
///
/// `crs` carries the input dataset's spatial reference (the legacy
/// GeoJSON `crs` member) through to the output unchanged.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    /// Spatial reference of the layer, propagated verbatim
    pub crs: Option<serde_json::Value>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// The first feature's polygon geometry.
    ///
    /// Additional features are ignored; this mirrors the
    /// first-feature-only boundary contract of the sampler.
    pub fn first_polygon(&self) -> Result<&Polygon<f64>> {
        let feature = self
            .features
            .first()
            .ok_or_else(|| Error::EmptyDataset("no boundary feature".to_string()))?;
        match &feature.geometry {
            Some(Geometry::Polygon(p)) => Ok(p),
            Some(other) => Err(Error::WrongGeometryType {
                expected: "Polygon",
                found: geometry_type_name(other).to_string(),
            }),
            None => Err(Error::WrongGeometryType {
                expected: "Polygon",
                found: "no geometry".to_string(),
            }),
        }
    }

    /// All features' point geometries, in dataset order.
    ///
    /// Fails on the first feature whose geometry is not a point.
    pub fn points(&self) -> Result<Vec<Point<f64>>> {
        if self.features.is_empty() {
            return Err(Error::EmptyDataset("no point features".to_string()));
        }
        self.features
            .iter()
            .map(|f| match &f.geometry {
                Some(Geometry::Point(p)) => Ok(*p),
                Some(other) => Err(Error::WrongGeometryType {
                    expected: "Point",
                    found: geometry_type_name(other).to_string(),
                }),
                None => Err(Error::WrongGeometryType {
                    expected: "Point",
                    found: "no geometry".to_string(),
                }),
            })
            .collect()
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{LineString, Point, Polygon};

    fn unit_square() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (0.0, 0.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn test_attribute_json_round_trip() {
        let values = vec![
            AttributeValue::Null,
            AttributeValue::Bool(true),
            AttributeValue::Int(42),
            AttributeValue::Float(2.5),
            AttributeValue::String("plot".to_string()),
        ];
        for v in values {
            assert_eq!(AttributeValue::from_json(&v.to_json()), v);
        }
    }

    #[test]
    fn test_first_polygon() {
        let mut fc = FeatureCollection::new();
        fc.push(Feature::new(Geometry::Polygon(unit_square())));
        assert!(fc.first_polygon().is_ok());
    }

    #[test]
    fn test_first_polygon_wrong_type() {
        let mut fc = FeatureCollection::new();
        fc.push(Feature::new(Geometry::Point(Point::new(0.0, 0.0))));
        let err = fc.first_polygon().unwrap_err();
        assert!(matches!(
            err,
            Error::WrongGeometryType {
                expected: "Polygon",
                ..
            }
        ));
    }

    #[test]
    fn test_first_polygon_empty() {
        let fc = FeatureCollection::new();
        assert!(matches!(fc.first_polygon(), Err(Error::EmptyDataset(_))));
    }

    #[test]
    fn test_points_in_order() {
        let mut fc = FeatureCollection::new();
        fc.push(Feature::new(Geometry::Point(Point::new(1.0, 2.0))));
        fc.push(Feature::new(Geometry::Point(Point::new(3.0, 4.0))));
        let pts = fc.points().unwrap();
        assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_points_rejects_polygon() {
        let mut fc = FeatureCollection::new();
        fc.push(Feature::new(Geometry::Point(Point::new(1.0, 2.0))));
        fc.push(Feature::new(Geometry::Polygon(unit_square())));
        assert!(fc.points().is_err());
    }

    #[test]
    fn test_feature_properties() {
        let mut f = Feature::new(Geometry::Point(Point::new(0.0, 0.0)));
        f.set_property("Id", AttributeValue::Int(1));
        assert_eq!(f.get_property("Id"), Some(&AttributeValue::Int(1)));
        assert_eq!(f.get_property("X"), None);
    }
}

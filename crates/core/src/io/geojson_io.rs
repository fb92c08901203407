//! GeoJSON dataset reading and writing
//!
//! Datasets are GeoJSON FeatureCollections. The legacy `crs` foreign
//! member, when present, is carried through reads and writes verbatim so
//! that outputs keep the spatial reference of their inputs.

use std::fs;
use std::path::Path;

use geojson::{GeoJson, JsonObject};

use crate::error::Result;
use crate::vector::{AttributeValue, Feature, FeatureCollection};

/// Read a vector dataset from a GeoJSON file.
///
/// Only the top-level FeatureCollection is consulted; a file holding a
/// bare Feature or Geometry is rejected.
pub fn read_features<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let contents = fs::read_to_string(path.as_ref())?;
    let document: GeoJson = contents.parse::<GeoJson>()?;
    let collection = geojson::FeatureCollection::try_from(document)?;

    let crs = collection
        .foreign_members
        .as_ref()
        .and_then(|members| members.get("crs").cloned());

    let mut features = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let geometry = match feature.geometry {
            Some(g) => Some(geo_types::Geometry::<f64>::try_from(g.value)?),
            None => None,
        };
        let properties = feature
            .properties
            .map(|props| {
                props
                    .iter()
                    .map(|(k, v)| (k.clone(), AttributeValue::from_json(v)))
                    .collect()
            })
            .unwrap_or_default();
        features.push(Feature {
            geometry,
            properties,
        });
    }

    Ok(FeatureCollection { features, crs })
}

/// Write a vector dataset to a GeoJSON file.
///
/// An existing file at `path` is deleted and recreated without
/// prompting. Callers are expected to validate inputs before writing so
/// that a failed run never destroys its output target.
pub fn write_features<P: AsRef<Path>>(path: P, collection: &FeatureCollection) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }

    let features = collection
        .iter()
        .map(|feature| {
            let geometry = feature
                .geometry
                .as_ref()
                .map(|g| geojson::Geometry::new(geojson::Value::from(g)));
            let properties: JsonObject = feature
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect();
            geojson::Feature {
                bbox: None,
                geometry,
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    let foreign_members = collection.crs.clone().map(|crs| {
        let mut members = JsonObject::new();
        members.insert("crs".to_string(), crs);
        members
    });

    let out = geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members,
    };

    let serialized = serde_json::to_string_pretty(&GeoJson::from(out))
        .map_err(|e| crate::error::Error::GeoJson(e.to_string()))?;
    fs::write(path, serialized)?;
    Ok(())
}

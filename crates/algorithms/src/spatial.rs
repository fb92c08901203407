//! Axis-aligned bounding extents

use geo::{BoundingRect, Polygon};

use plotgen_core::{Error, Result};

/// Axis-aligned bounding box of a boundary polygon.
///
/// Candidate draws and the grid walk read the extent edges directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounding extent of a polygon
    pub fn of_polygon(polygon: &Polygon<f64>) -> Result<Self> {
        let rect = polygon
            .bounding_rect()
            .ok_or_else(|| Error::Other("boundary polygon has no extent".to_string()))?;
        Ok(Self {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        })
    }
}

//! Buffer polygon construction centered on points
//!
//! Builds one buffer polygon per input point: a circle approximated by
//! a fixed-angle-step ring, or an axis-aligned rectangle (a square is a
//! rectangle with equal sides). Rings are counter-clockwise and always
//! explicitly closed with a duplicate first vertex, since downstream
//! format validators commonly require closed rings.

use geo::{LineString, Point, Polygon};
use std::f64::consts::PI;

use plotgen_core::{Error, Result};

/// Default angular step for circle approximation, in radians.
///
/// A full sweep at this step yields 629 ring vertices regardless of
/// radius, so the absolute chord error grows with the radius.
pub const DEFAULT_ANGLE_STEP: f64 = 0.01;

/// Buffer shape to stamp at each point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BufferShape {
    /// Circle of given radius
    Circle(f64),
    /// Axis-aligned square of given side length
    Square(f64),
    /// Axis-aligned rectangle of given x and y side lengths
    Rectangle(f64, f64),
}

impl BufferShape {
    /// Validate the shape, rejecting non-positive or non-finite sizes
    pub fn validate(&self) -> Result<()> {
        let check = |name: &'static str, value: f64| -> Result<()> {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    name,
                    value: value.to_string(),
                    reason: "size must be a positive finite number".to_string(),
                });
            }
            Ok(())
        };
        match self {
            BufferShape::Circle(radius) => check("radius", *radius),
            BufferShape::Square(side) => check("side_length", *side),
            BufferShape::Rectangle(x_side, y_side) => {
                check("x_side_length", *x_side)?;
                check("y_side_length", *y_side)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BufferShape::Circle(_) => "circle",
            BufferShape::Square(_) => "square",
            BufferShape::Rectangle(_, _) => "rectangle",
        }
    }
}

/// Parameters for stamping buffer polygons
#[derive(Debug, Clone)]
pub struct StampParams {
    /// Angular resolution for circle approximation, in radians.
    /// Smaller steps trade vertex count for accuracy.
    pub angle_step: f64,
}

impl Default for StampParams {
    fn default() -> Self {
        Self {
            angle_step: DEFAULT_ANGLE_STEP,
        }
    }
}

impl StampParams {
    pub fn validate(&self) -> Result<()> {
        if !self.angle_step.is_finite() || self.angle_step <= 0.0 || self.angle_step >= 2.0 * PI {
            return Err(Error::InvalidParameter {
                name: "angle_step",
                value: self.angle_step.to_string(),
                reason: "angle step must be in (0, 2*pi) radians".to_string(),
            });
        }
        Ok(())
    }
}

/// Build a closed ring approximating a circle.
///
/// Vertices are placed counter-clockwise at angles `i * angle_step` for
/// all multiples of the step within a full sweep, then the ring is
/// closed. Angles are computed from the index rather than accumulated,
/// so the vertex count is exactly `floor(2*pi / angle_step) + 2`
/// (including the closing duplicate) for any radius.
pub fn circle(center: &Point<f64>, radius: f64, angle_step: f64) -> Polygon<f64> {
    let samples = (2.0 * PI / angle_step).floor() as usize + 1;
    let mut coords = Vec::with_capacity(samples + 1);
    for i in 0..samples {
        let angle = i as f64 * angle_step;
        coords.push((
            center.x() + radius * angle.cos(),
            center.y() + radius * angle.sin(),
        ));
    }
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

/// Build a closed axis-aligned rectangle from a center and side lengths.
///
/// Vertices run counter-clockwise from the bottom-left corner and the
/// first vertex is repeated to close the ring.
pub fn rectangle(center: &Point<f64>, x_side: f64, y_side: f64) -> Polygon<f64> {
    let delta_x = x_side / 2.0;
    let delta_y = y_side / 2.0;
    let left = center.x() - delta_x;
    let right = center.x() + delta_x;
    let bottom = center.y() - delta_y;
    let top = center.y() + delta_y;

    Polygon::new(
        LineString::from(vec![
            (left, bottom),
            (right, bottom),
            (right, top),
            (left, top),
            (left, bottom),
        ]),
        vec![],
    )
}

/// Stamp the configured shape centered on a single point
pub fn stamp(center: &Point<f64>, shape: &BufferShape, params: &StampParams) -> Polygon<f64> {
    match *shape {
        BufferShape::Circle(radius) => circle(center, radius, params.angle_step),
        BufferShape::Square(side) => rectangle(center, side, side),
        BufferShape::Rectangle(x_side, y_side) => rectangle(center, x_side, y_side),
    }
}

/// Stamp one buffer polygon per input point, in input order.
///
/// No point is ever dropped: the output length always equals the input
/// length. Shape and resolution are validated once up front.
pub fn stamp_all(
    points: &[Point<f64>],
    shape: &BufferShape,
    params: &StampParams,
) -> Result<Vec<Polygon<f64>>> {
    shape.validate()?;
    params.validate()?;
    Ok(points.iter().map(|p| stamp(p, shape, params)).collect())
}

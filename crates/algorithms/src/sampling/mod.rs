//! Point sampling within a polygon boundary
//!
//! Three strategies for filling a boundary polygon with sample points:
//!
//! - **Simple random**: rejection sampling over the bounding extent;
//!   returns exactly the requested count.
//! - **Systematic grid**: points on a regular square grid whose spacing
//!   is derived from the boundary area and requested count; returns
//!   approximately the requested count.
//! - **Randomized grid**: the systematic grid with each candidate
//!   jittered uniformly within its grid cell.
//!
//! All strategies keep only points strictly inside the boundary, in
//! row-major generation order. Randomness is drawn from a caller-owned
//! RNG so runs are reproducible under a fixed seed.

use geo::{Area, Contains, Point, Polygon};
use rand::Rng;

use plotgen_core::{Error, Result};

use crate::spatial::BoundingBox;

/// Boundary areas at or below this are rejected: grid spacing becomes
/// degenerate and rejection sampling effectively never terminates.
pub const MIN_BOUNDARY_AREA: f64 = 0.001;

/// Point selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMethod {
    /// Uniform rejection sampling; exact count
    SimpleRandom,
    /// Regular square grid; approximate count
    SystematicGrid,
    /// Jittered square grid; approximate count
    #[default]
    RandomizedGrid,
}

impl SampleMethod {
    /// Parse the short CLI flag (`r`, `sg`, `rg`). Unknown values yield
    /// `None` so callers can decide how to fall back.
    pub fn parse_flag(flag: &str) -> Option<Self> {
        match flag {
            "r" => Some(SampleMethod::SimpleRandom),
            "sg" => Some(SampleMethod::SystematicGrid),
            "rg" => Some(SampleMethod::RandomizedGrid),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SampleMethod::SimpleRandom => "Simple Random",
            SampleMethod::SystematicGrid => "Systematic Grid",
            SampleMethod::RandomizedGrid => "Randomized Grid",
        }
    }
}

/// Parameters for point sampling
#[derive(Debug, Clone)]
pub struct SamplingParams {
    /// Target number of points (must be at least 1).
    /// Exact for `SimpleRandom`, approximate for the grid methods.
    pub count: usize,
    /// Selection strategy
    pub method: SampleMethod,
    /// Cap on rejection-sampling attempts for `SimpleRandom`.
    /// `None` retries forever, which can spin indefinitely when the
    /// boundary covers a vanishing fraction of its bounding extent.
    pub max_attempts: Option<u64>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            count: 100,
            method: SampleMethod::default(),
            max_attempts: None,
        }
    }
}

/// Sample points inside a boundary polygon using the configured method.
///
/// Returns points in generation order; every point is strictly inside
/// the boundary.
pub fn sample_points<R: Rng>(
    boundary: &Polygon<f64>,
    params: &SamplingParams,
    rng: &mut R,
) -> Result<Vec<Point<f64>>> {
    validate_count(params.count)?;
    match params.method {
        SampleMethod::SimpleRandom => {
            simple_random(boundary, params.count, params.max_attempts, rng)
        }
        SampleMethod::SystematicGrid => systematic_grid(boundary, params.count),
        SampleMethod::RandomizedGrid => randomized_grid(boundary, params.count, rng),
    }
}

/// Compute the square-grid spacing for a target count from the
/// boundary's true area: `sqrt(area / count)`.
///
/// The output count of the grid methods approximates the target only
/// when the boundary reasonably fills its bounding extent, since the
/// spacing heuristic uses the polygon area rather than the extent area.
pub fn grid_spacing(area: f64, count: usize) -> Result<f64> {
    validate_count(count)?;
    if area <= MIN_BOUNDARY_AREA {
        return Err(Error::DegenerateArea {
            area,
            minimum: MIN_BOUNDARY_AREA,
        });
    }
    Ok((area / count as f64).sqrt())
}

/// Simple random sampling: draw candidates uniformly over the bounding
/// extent and keep the first `count` that fall strictly inside the
/// boundary.
///
/// With `max_attempts = None` this retries until it succeeds, which is
/// the documented liveness risk of rejection sampling. A set cap
/// converts a sparse boundary into a `BoundaryTooSparse` error instead.
pub fn simple_random<R: Rng>(
    boundary: &Polygon<f64>,
    count: usize,
    max_attempts: Option<u64>,
    rng: &mut R,
) -> Result<Vec<Point<f64>>> {
    validate_count(count)?;
    let extent = BoundingBox::of_polygon(boundary)?;

    let mut points = Vec::with_capacity(count);
    let mut attempts: u64 = 0;
    while points.len() < count {
        if let Some(cap) = max_attempts {
            if attempts >= cap {
                return Err(Error::BoundaryTooSparse {
                    attempts,
                    accepted: points.len(),
                    requested: count,
                });
            }
        }
        attempts += 1;

        let candidate = Point::new(
            rng.gen_range(extent.min_x..=extent.max_x),
            rng.gen_range(extent.min_y..=extent.max_y),
        );
        if boundary.contains(&candidate) {
            points.push(candidate);
        }
    }
    Ok(points)
}

/// Systematic grid sampling: regular grid nodes, filtered to the
/// boundary interior.
pub fn systematic_grid(boundary: &Polygon<f64>, count: usize) -> Result<Vec<Point<f64>>> {
    gridded::<rand::rngs::StdRng>(boundary, count, None)
}

/// Randomized grid sampling: one candidate per grid cell, jittered
/// uniformly within the cell, filtered to the boundary interior.
pub fn randomized_grid<R: Rng>(
    boundary: &Polygon<f64>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Point<f64>>> {
    gridded(boundary, count, Some(rng))
}

/// Shared grid walk for the systematic and randomized strategies.
///
/// Rows start at `min_y + s/2` and columns at `min_x + s/2`, stepping
/// by the spacing until the accumulated coordinate exceeds the extent
/// maximum. The accumulation deliberately uses repeated floating-point
/// addition, so the last row/column may drift slightly relative to an
/// index-based walk; the inclusive `<=` bound matches that behavior.
/// Emission is row-major: all columns of a row before the next row.
fn gridded<R: Rng>(
    boundary: &Polygon<f64>,
    count: usize,
    mut jitter: Option<&mut R>,
) -> Result<Vec<Point<f64>>> {
    validate_count(count)?;
    let spacing = grid_spacing(boundary.unsigned_area(), count)?;
    let extent = BoundingBox::of_polygon(boundary)?;
    let half = spacing / 2.0;

    let mut points = Vec::with_capacity(count);
    let mut y = extent.min_y + half;
    while y <= extent.max_y {
        let mut x = extent.min_x + half;
        while x <= extent.max_x {
            let candidate = match jitter.as_deref_mut() {
                Some(rng) => Point::new(
                    rng.gen_range(x - half..=x + half),
                    rng.gen_range(y - half..=y + half),
                ),
                None => Point::new(x, y),
            };
            if boundary.contains(&candidate) {
                points.push(candidate);
            }
            x += spacing;
        }
        y += spacing;
    }
    Ok(points)
}

fn validate_count(count: usize) -> Result<()> {
    if count < 1 {
        return Err(Error::InvalidParameter {
            name: "count",
            value: count.to_string(),
            reason: "target point count must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (size, 0.0),
                (size, size),
                (0.0, size),
                (0.0, 0.0),
            ]),
            vec![],
        )
    }

    /// Closed ring with zero enclosed area; nothing is ever inside it.
    fn sliver() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 0.0), (0.0, 0.0)]),
            vec![],
        )
    }

    #[test]
    fn test_simple_random_exact_count_and_containment() {
        let boundary = square(10.0);
        let mut rng = StdRng::seed_from_u64(7);

        let points = simple_random(&boundary, 25, None, &mut rng).unwrap();

        assert_eq!(points.len(), 25);
        for p in &points {
            assert!(boundary.contains(p), "{:?} not inside boundary", p);
        }
    }

    #[test]
    fn test_simple_random_deterministic() {
        let boundary = square(10.0);
        let a = simple_random(&boundary, 50, None, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = simple_random(&boundary, 50, None, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simple_random_sparse_boundary_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = simple_random(&sliver(), 5, Some(64), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::BoundaryTooSparse {
                attempts: 64,
                accepted: 0,
                requested: 5,
            }
        ));
    }

    #[test]
    fn test_grid_spacing() {
        assert_eq!(grid_spacing(1.0, 4).unwrap(), 0.5);
        assert_eq!(grid_spacing(100.0, 100).unwrap(), 1.0);
    }

    #[test]
    fn test_grid_spacing_degenerate_area() {
        let err = grid_spacing(0.001, 10).unwrap_err();
        assert!(matches!(err, Error::DegenerateArea { .. }));
        assert!(grid_spacing(0.0, 10).is_err());
    }

    #[test]
    fn test_systematic_grid_unit_square() {
        // spacing = sqrt(1/4) = 0.5; grid starts at 0.25 in both axes
        let points = systematic_grid(&square(1.0), 4).unwrap();
        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x(), p.y())).collect();
        assert_eq!(
            coords,
            vec![(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)]
        );
    }

    #[test]
    fn test_systematic_grid_fills_square_exactly() {
        // A space-filling boundary hits the target count exactly
        let points = systematic_grid(&square(10.0), 100).unwrap();
        assert_eq!(points.len(), 100);
    }

    #[test]
    fn test_systematic_grid_row_major_order() {
        let points = systematic_grid(&square(10.0), 100).unwrap();
        for pair in points.windows(2) {
            let same_row = pair[0].y() == pair[1].y();
            if same_row {
                assert!(pair[0].x() < pair[1].x());
            } else {
                assert!(pair[0].y() < pair[1].y());
            }
        }
    }

    #[test]
    fn test_randomized_grid_contained_and_deterministic() {
        let boundary = square(10.0);
        let a = randomized_grid(&boundary, 100, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = randomized_grid(&boundary, 100, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(a, b);
        assert!(!a.is_empty());
        for p in &a {
            assert!(boundary.contains(p));
        }
    }

    #[test]
    fn test_randomized_grid_jitters_nodes() {
        let boundary = square(10.0);
        let systematic = systematic_grid(&boundary, 100).unwrap();
        let randomized = randomized_grid(&boundary, 100, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_ne!(systematic, randomized);
    }

    #[test]
    fn test_zero_count_rejected() {
        let boundary = square(1.0);
        let mut rng = StdRng::seed_from_u64(0);
        let params = SamplingParams {
            count: 0,
            ..SamplingParams::default()
        };
        assert!(matches!(
            sample_points(&boundary, &params, &mut rng),
            Err(Error::InvalidParameter { name: "count", .. })
        ));
    }

    #[test]
    fn test_sample_points_dispatch() {
        let boundary = square(10.0);
        let mut rng = StdRng::seed_from_u64(11);
        let params = SamplingParams {
            count: 10,
            method: SampleMethod::SimpleRandom,
            max_attempts: None,
        };
        let points = sample_points(&boundary, &params, &mut rng).unwrap();
        assert_eq!(points.len(), 10);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(SampleMethod::parse_flag("r"), Some(SampleMethod::SimpleRandom));
        assert_eq!(SampleMethod::parse_flag("sg"), Some(SampleMethod::SystematicGrid));
        assert_eq!(SampleMethod::parse_flag("rg"), Some(SampleMethod::RandomizedGrid));
        assert_eq!(SampleMethod::parse_flag("xyz"), None);
    }
}

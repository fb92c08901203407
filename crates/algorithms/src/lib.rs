//! # plotgen Algorithms
//!
//! Sampling and shape-construction algorithms for plotgen.
//!
//! ## Available modules
//!
//! - **sampling**: simple random, systematic grid, and randomized grid
//!   point sampling within a polygon boundary
//! - **buffer**: circle and rectangle buffer polygons stamped on points
//! - **spatial**: axis-aligned bounding extents

pub mod buffer;
pub mod sampling;
pub mod spatial;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::buffer::{
        circle, rectangle, stamp, stamp_all, BufferShape, StampParams, DEFAULT_ANGLE_STEP,
    };
    pub use crate::sampling::{
        grid_spacing, randomized_grid, sample_points, simple_random, systematic_grid,
        SampleMethod, SamplingParams, MIN_BOUNDARY_AREA,
    };
    pub use crate::spatial::BoundingBox;
    pub use plotgen_core::prelude::*;
}

//! # plotgen Core
//!
//! Core types and I/O for the plotgen sampling tools.
//!
//! This crate provides:
//! - `Feature` / `FeatureCollection`: vector feature model with attributes
//! - `AttributeValue`: typed attribute values
//! - GeoJSON dataset reading and writing with spatial-reference passthrough
//! - Shared error types

pub mod error;
pub mod io;
pub mod vector;

pub use error::{Error, Result};
pub use vector::{geometry_type_name, AttributeValue, Feature, FeatureCollection};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::io::{read_features, write_features};
    pub use crate::vector::{AttributeValue, Feature, FeatureCollection};
}

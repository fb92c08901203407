//! Error types for plotgen

use thiserror::Error;

/// Main error type for plotgen operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    #[error("Dataset contains no features: {0}")]
    EmptyDataset(String),

    #[error("Wrong geometry type: expected {expected}, found {found}")]
    WrongGeometryType {
        expected: &'static str,
        found: String,
    },

    #[error("Boundary area {area} is at or below the minimum of {minimum} square units")]
    DegenerateArea { area: f64, minimum: f64 },

    #[error("Boundary too sparse: {accepted} of {requested} points after {attempts} attempts")]
    BoundaryTooSparse {
        attempts: u64,
        accepted: usize,
        requested: usize,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl From<geojson::Error> for Error {
    fn from(e: geojson::Error) -> Self {
        Error::GeoJson(e.to_string())
    }
}

/// Result type alias for plotgen operations
pub type Result<T> = std::result::Result<T, Error>;

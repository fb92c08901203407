//! I/O operations for reading and writing vector datasets

mod geojson_io;

pub use geojson_io::{read_features, write_features};

//! Random point sampler
//!
//! Generates a point dataset of random points inside a polygon boundary.
//! Three selection methods are available: simple random (exact count),
//! systematic grid, and randomized grid (both approximate).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use geo::Area;
use geo_types::Geometry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use plotgen_algorithms::sampling::{sample_points, SampleMethod, SamplingParams};
use plotgen_cli::{
    done, parse_or_exit, read_dataset, setup_logging, tagged_feature, usage_error, write_dataset,
};
use plotgen_core::FeatureCollection;

#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about = "Generate random points inside a polygon boundary", long_about = None)]
struct Cli {
    /// Sampling method: r (simple random), sg (systematic grid),
    /// rg (randomized grid)
    #[arg(short, long, default_value = "rg")]
    method: String,

    /// Approximate number of points to generate (exact for method r)
    #[arg(short = 'n', long = "count")]
    count: u64,

    /// RNG seed for reproducible runs (default: from entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Abort simple-random sampling after this many candidate draws
    /// instead of retrying forever on a sparse boundary
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Input boundary dataset (polygon GeoJSON; first feature only)
    input: PathBuf,

    /// Output point dataset (GeoJSON; overwritten if present)
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli: Cli = parse_or_exit();
    setup_logging(cli.verbose);

    if cli.count < 1 {
        usage_error(&mut Cli::command(), "count must be at least 1");
    }
    let method = match SampleMethod::parse_flag(&cli.method) {
        Some(m) => m,
        None => {
            eprintln!(
                "Unknown method: {}. Using rg (Randomized Grid).",
                cli.method
            );
            SampleMethod::RandomizedGrid
        }
    };
    info!("Method: {}", method.name());
    info!("Approximate number of points to select: {}", cli.count);

    let dataset = read_dataset(&cli.input)?;
    let boundary = match dataset.first_polygon() {
        Ok(polygon) => polygon,
        Err(err) => usage_error(&mut Cli::command(), &err.to_string()),
    };
    info!("Boundary area: {} square units", boundary.unsigned_area());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let params = SamplingParams {
        count: cli.count as usize,
        method,
        max_attempts: cli.max_attempts,
    };

    let start = Instant::now();
    let points = sample_points(boundary, &params, &mut rng)
        .context("Failed to generate sample points")?;
    let elapsed = start.elapsed();

    // The output target is touched only after sampling has succeeded,
    // so a failed run never destroys an existing file.
    let mut out = FeatureCollection::new();
    out.crs = dataset.crs.clone();
    for (i, point) in points.iter().enumerate() {
        out.push(tagged_feature(
            Geometry::Point(*point),
            i as i64 + 1,
            point.x(),
            point.y(),
        ));
    }
    write_dataset(&out, &cli.output)?;

    println!("{} points generated", out.len());
    done("Random points", &cli.output, elapsed);
    Ok(())
}

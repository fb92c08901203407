//! Buffer polygon stamper
//!
//! Generates one buffer polygon (circle, square, or rectangle) centered
//! at each point of a point dataset.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use geo_types::Geometry;
use tracing::info;

use plotgen_algorithms::buffer::{stamp_all, BufferShape, StampParams, DEFAULT_ANGLE_STEP};
use plotgen_cli::{
    done, parse_or_exit, read_dataset, setup_logging, tagged_feature, usage_error, write_dataset,
};
use plotgen_core::FeatureCollection;

#[derive(Parser)]
#[command(name = "stamper")]
#[command(author, version, about = "Stamp buffer polygons centered on each input point", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    shape: ShapeCommand,
}

#[derive(Subcommand)]
enum ShapeCommand {
    /// Circle buffers of the given radius
    #[command(name = "c", alias = "circle")]
    Circle {
        /// Circle radius
        radius: f64,
        /// Input point dataset (GeoJSON)
        input: PathBuf,
        /// Output polygon dataset (GeoJSON; overwritten if present)
        output: PathBuf,
        /// Angular resolution of the circle ring, in radians
        #[arg(long, default_value_t = DEFAULT_ANGLE_STEP)]
        angle_step: f64,
    },
    /// Square buffers of the given side length
    #[command(name = "s", alias = "square")]
    Square {
        /// Side length
        side_length: f64,
        /// Input point dataset (GeoJSON)
        input: PathBuf,
        /// Output polygon dataset (GeoJSON; overwritten if present)
        output: PathBuf,
    },
    /// Rectangle buffers of the given side lengths
    #[command(name = "r", alias = "rectangle")]
    Rectangle {
        /// Side length along the x axis
        x_side_length: f64,
        /// Side length along the y axis
        y_side_length: f64,
        /// Input point dataset (GeoJSON)
        input: PathBuf,
        /// Output polygon dataset (GeoJSON; overwritten if present)
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli: Cli = parse_or_exit();
    setup_logging(cli.verbose);

    let (shape, params, input, output) = match cli.shape {
        ShapeCommand::Circle {
            radius,
            input,
            output,
            angle_step,
        } => (
            BufferShape::Circle(radius),
            StampParams { angle_step },
            input,
            output,
        ),
        ShapeCommand::Square {
            side_length,
            input,
            output,
        } => (
            BufferShape::Square(side_length),
            StampParams::default(),
            input,
            output,
        ),
        ShapeCommand::Rectangle {
            x_side_length,
            y_side_length,
            input,
            output,
        } => (
            BufferShape::Rectangle(x_side_length, y_side_length),
            StampParams::default(),
            input,
            output,
        ),
    };

    if let Err(err) = shape.validate().and_then(|_| params.validate()) {
        usage_error(&mut Cli::command(), &err.to_string());
    }
    info!("Type: {}", shape.name());

    let dataset = read_dataset(&input)?;
    let points = match dataset.points() {
        Ok(points) => points,
        Err(err) => usage_error(&mut Cli::command(), &err.to_string()),
    };
    info!("{} input points", points.len());

    let start = Instant::now();
    let polygons = stamp_all(&points, &shape, &params)?;
    let elapsed = start.elapsed();

    let mut out = FeatureCollection::new();
    out.crs = dataset.crs.clone();
    for (i, (point, polygon)) in points.iter().zip(polygons).enumerate() {
        out.push(tagged_feature(
            Geometry::Polygon(polygon),
            i as i64 + 1,
            point.x(),
            point.y(),
        ));
    }
    write_dataset(&out, &output)?;

    println!("{} {} polygons generated", out.len(), shape.name());
    done("Buffer polygons", &output, elapsed);
    Ok(())
}

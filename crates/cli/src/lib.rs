//! Shared plumbing for the plotgen command-line tools

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use geo_types::Geometry;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use plotgen_core::io::{read_features, write_features};
use plotgen_core::{AttributeValue, Feature, FeatureCollection};

pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn read_dataset(path: &Path) -> Result<FeatureCollection> {
    let pb = spinner("Reading dataset...");
    let collection = read_features(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    pb.finish_and_clear();
    Ok(collection)
}

pub fn write_dataset(collection: &FeatureCollection, path: &Path) -> Result<()> {
    let pb = spinner("Writing output...");
    write_features(path, collection)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    pb.finish_and_clear();
    Ok(())
}

/// Round an attribute coordinate to 3 decimal places, the precision of
/// the X/Y output fields.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Build an output feature with the standard `{Id, X, Y}` field schema.
///
/// `Id` is the 1-based sequential identifier; X/Y record the source
/// point coordinates at field precision.
pub fn tagged_feature(geometry: Geometry<f64>, id: i64, x: f64, y: f64) -> Feature {
    let mut feature = Feature::new(geometry);
    feature.set_property("Id", AttributeValue::Int(id));
    feature.set_property("X", AttributeValue::Float(round3(x)));
    feature.set_property("Y", AttributeValue::Float(round3(y)));
    feature
}

/// Parse command-line arguments under the tools' exit contract:
/// help and version requests print and exit 0, while genuine parse
/// failures print their diagnostic and exit 1 (not clap's default 2).
pub fn parse_or_exit<T: clap::Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(usage_exit_code(err.kind()));
        }
    }
}

/// Exit status for a clap error kind: 0 for help/version displays,
/// 1 for everything else
pub fn usage_exit_code(kind: clap::error::ErrorKind) -> i32 {
    match kind {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Print a usage diagnostic and terminate with exit status 1
pub fn usage_error(cmd: &mut clap::Command, msg: &str) -> ! {
    eprintln!("Error: {msg}");
    eprintln!("{}", cmd.render_usage());
    std::process::exit(1);
}

pub fn done(name: &str, path: &Path, elapsed: Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use geo_types::Point;

    #[derive(Debug, Parser)]
    #[command(name = "tool", version = "0.1.0")]
    struct ToolCli {
        #[arg(short = 'n')]
        count: u64,
        input: String,
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let err = ToolCli::try_parse_from(["tool", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(err.kind()), 0);

        let err = ToolCli::try_parse_from(["tool", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(err.kind()), 0);
    }

    #[test]
    fn test_parse_failures_exit_one() {
        // Missing required arguments
        let err = ToolCli::try_parse_from(["tool"]).unwrap_err();
        assert_eq!(usage_exit_code(err.kind()), 1);

        // Malformed value
        let err = ToolCli::try_parse_from(["tool", "-n", "many", "in.geojson"]).unwrap_err();
        assert_eq!(usage_exit_code(err.kind()), 1);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-0.0004), -0.0);
        assert_eq!(round3(10.0), 10.0);
    }

    #[test]
    fn test_tagged_feature_schema() {
        let feature = tagged_feature(Geometry::Point(Point::new(1.23456, 7.0)), 3, 1.23456, 7.0);
        assert_eq!(feature.get_property("Id"), Some(&AttributeValue::Int(3)));
        assert_eq!(feature.get_property("X"), Some(&AttributeValue::Float(1.235)));
        assert_eq!(feature.get_property("Y"), Some(&AttributeValue::Float(7.0)));
        assert!(feature.point().is_some());
    }
}

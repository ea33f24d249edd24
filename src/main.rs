//! greytiff - decode and inspect 16-bit greyscale TIFF files.
//!
//! Decodes every file given on the command line and prints its metadata.
//! Failures are reported per file; the exit code is non-zero if any failed.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greytiff::{
    decode_file, ByteOrder, Config, DecodedImage, ImageMetadata, OutputFormat, ResolutionUnit,
};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    debug!(
        files = config.files.len(),
        max_file_size = config.max_file_size,
        "starting"
    );

    let mut failures = 0usize;

    for path in &config.files {
        match decode_file(path, config.max_file_size) {
            Ok(image) => print_report(path, &image, config.format),
            Err(e) => {
                failures += 1;
                error!("{}: {}", path.display(), e);
                if config.format == OutputFormat::Json {
                    print_json(&FileReport::failed(path, e.to_string()));
                }
                if config.fail_fast {
                    break;
                }
            }
        }
    }

    if failures > 0 {
        info!(
            "{} of {} file(s) failed to decode",
            failures,
            config.files.len()
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so that stdout only carries the reports.
fn init_logging(verbose: bool) {
    let env_filter = if verbose { "greytiff=debug" } else { "greytiff=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// =============================================================================
// Reports
// =============================================================================

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    byte_order: Option<ByteOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a ImageMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<u16>,
}

impl<'a> FileReport<'a> {
    fn decoded(path: &Path, image: &'a DecodedImage) -> Self {
        let samples = image.pixels().as_slice();
        FileReport {
            path: path.display().to_string(),
            ok: true,
            error: None,
            byte_order: Some(image.byte_order()),
            metadata: Some(image.metadata()),
            min: samples.iter().copied().min(),
            max: samples.iter().copied().max(),
        }
    }

    fn failed(path: &Path, error: String) -> Self {
        FileReport {
            path: path.display().to_string(),
            ok: false,
            error: Some(error),
            byte_order: None,
            metadata: None,
            min: None,
            max: None,
        }
    }
}

fn print_report(path: &Path, image: &DecodedImage, format: OutputFormat) {
    let report = FileReport::decoded(path, image);

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            let meta = image.metadata();
            println!("{}", report.path);
            println!("  size:        {}x{}", image.width(), image.height());
            println!("  byte order:  {}", image.byte_order().name());
            println!(
                "  data:        {} bytes at offset {}",
                meta.pixel_data_byte_count.unwrap_or_default(),
                meta.pixel_data_offset.unwrap_or_default()
            );
            if let (Some(min), Some(max)) = (report.min, report.max) {
                println!("  range:       {}..={}", min, max);
            }
            if let (Some(x), Some(y)) = (meta.x_resolution, meta.y_resolution) {
                let unit = match meta.resolution_unit_kind() {
                    Some(ResolutionUnit::Inch) => " per inch",
                    Some(ResolutionUnit::Centimeter) => " per cm",
                    _ => "",
                };
                println!(
                    "  resolution:  {}/{} x {}/{}{}",
                    x.numerator, x.denominator, y.numerator, y.denominator, unit
                );
            }
        }
    }
}

fn print_json(report: &FileReport<'_>) {
    match serde_json::to_string(report) {
        Ok(line) => println!("{}", line),
        Err(e) => error!("Failed to serialize report for {}: {}", report.path, e),
    }
}

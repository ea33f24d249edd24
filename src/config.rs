//! Configuration for the `greytiff` command-line tool.
//!
//! Options can be given as flags or through environment variables with the
//! `GREYTIFF_` prefix:
//!
//! - `GREYTIFF_FORMAT` - Output format, `text` or `json` (default: text)
//! - `GREYTIFF_MAX_FILE_SIZE` - Largest file to load, in bytes (default: 256 MiB)
//!
//! # Example
//!
//! ```ignore
//! use greytiff::config::Config;
//!
//! let config = Config::parse();
//! for path in &config.files {
//!     println!("{}", path.display());
//! }
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::io::DEFAULT_MAX_FILE_SIZE;

// =============================================================================
// Output Format
// =============================================================================

/// How per-file results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable block per file
    #[default]
    Text,
    /// One JSON object per file, one per line
    Json,
}

// =============================================================================
// CLI Arguments
// =============================================================================

/// greytiff - decode and inspect 16-bit greyscale TIFF files.
///
/// Each file is decoded independently; a file that fails to decode is
/// reported and skipped unless --fail-fast is given.
#[derive(Parser, Debug, Clone)]
#[command(name = "greytiff")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// TIFF files to decode.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "GREYTIFF_FORMAT")]
    pub format: OutputFormat,

    /// Largest file to load into memory, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE, env = "GREYTIFF_MAX_FILE_SIZE")]
    pub max_file_size: u64,

    /// Stop at the first file that fails to decode.
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.files.is_empty() {
            return Err("At least one input file is required".to_string());
        }

        if self.max_file_size == 0 {
            return Err("max_file_size must be greater than 0".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

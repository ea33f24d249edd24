//! # greytiff
//!
//! A strict decoder for single-channel, 16-bit, uncompressed TIFF images.
//!
//! The decoder reads a whole file from memory, resolves the metadata of its
//! first image directory, rejects anything outside the supported profile and
//! returns the samples as a grid indexed by `(x, y)`.
//!
//! ## Architecture
//!
//! - [`io`] - Integer readers shared by every parse step, and file loading
//! - [`mod@format`] - TIFF header, directory, metadata, validation and pixels
//! - [`config`] - CLI configuration for the `greytiff` binary
//! - [`error`] - Typed errors for each failure kind
//!
//! ## Example
//!
//! ```rust,no_run
//! use greytiff::{decode, DecodeError};
//!
//! let bytes = std::fs::read("render/0000.tif").unwrap();
//! match decode(&bytes) {
//!     Ok(image) => {
//!         let corner = image.sample(0, 0);
//!         println!("{}x{}, first sample {}", image.width(), image.height(), corner);
//!     }
//!     Err(DecodeError::Validation(e)) => eprintln!("unsupported image ({})", e.field()),
//!     Err(e) => eprintln!("corrupt file: {}", e),
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{
    DecodeError, FormatError, IoError, LoadError, MetadataField, RangeError, ValidationError,
};
pub use format::tiff::{
    decode_pixels, validate, ByteOrder, Directory, DirectoryEntry, FieldType, ImageMetadata,
    PixelGrid, Rational, ResolutionUnit, TiffHeader, TiffTag, ValidatedMetadata,
    DIRECTORY_ENTRY_SIZE, TIFF_HEADER_SIZE,
};
pub use format::{decode, decode_file, DecodedImage};
pub use io::{read_file, read_uint_be, read_uint_le, DEFAULT_MAX_FILE_SIZE};

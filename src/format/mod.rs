//! Image format decoding.
//!
//! [`tiff`] holds the pieces of the TIFF pipeline (header, directory,
//! metadata, validation, pixels); [`decode()`] wires them together.

pub mod decode;
pub mod tiff;

pub use decode::{decode, decode_file, DecodedImage};

//! TIFF parser for single-channel 16-bit images.
//!
//! # Key Concepts
//!
//! - **Byte order**: TIFF files declare their endianness (II = little-endian,
//!   MM = big-endian) in the header. All multi-byte values, pixel samples
//!   included, are read respecting this order.
//!
//! - **Directory**: a table of tagged entries describing the image and
//!   pointing at its pixel data. Only the first directory is read.
//!
//! - **Inline vs offset values**: values of up to 4 bytes are stored in the
//!   entry itself, left-justified. Larger values (arrays, rationals) are
//!   stored elsewhere and the entry holds their offset.
//!
//! - **Profile**: 16-bit, one sample per pixel, uncompressed, one strip.
//!   Files outside the profile are rejected by [`validate`].

mod metadata;
mod parser;
mod pixels;
mod tags;
mod validation;

pub use metadata::{ImageMetadata, Rational};
pub use parser::{
    ByteOrder, Directory, DirectoryEntry, TiffHeader, DIRECTORY_ENTRY_SIZE, TIFF_HEADER_SIZE,
};
pub use pixels::{decode_pixels, PixelGrid};
pub use tags::{FieldType, ResolutionUnit, TiffTag};
pub use validation::{validate, ValidatedMetadata};

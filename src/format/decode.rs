//! Top-level decode entry points.
//!
//! [`decode`] runs the whole pipeline on an in-memory buffer:
//!
//! 1. Parse the header (byte order, magic, directory offset)
//! 2. Parse the directory entries
//! 3. Resolve the entries into metadata
//! 4. Validate the metadata against the supported profile
//! 5. Decode the pixel grid
//!
//! Each step needs the previous one, and the first failure ends the decode.
//! Decoding is a pure function of the buffer: nothing is cached or shared
//! between calls, so separate files can be decoded on separate threads.

use std::path::Path;

use tracing::debug;

use crate::error::{DecodeError, LoadError};
use crate::io::read_file;

use super::tiff::{
    decode_pixels, validate, ByteOrder, Directory, ImageMetadata, PixelGrid, TiffHeader,
};

// =============================================================================
// DecodedImage
// =============================================================================

/// A decoded image: resolved metadata plus the pixel grid.
///
/// Immutable once returned from [`decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    metadata: ImageMetadata,
    byte_order: ByteOrder,
    pixels: PixelGrid,
}

impl DecodedImage {
    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Sample at column `x`, row `y`, in `0..=65535`.
    ///
    /// # Panics
    /// Panics if `x >= width()` or `y >= height()`.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> u16 {
        self.pixels.sample(x, y)
    }

    /// Sample at column `x`, row `y`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        self.pixels.get(x, y)
    }

    pub fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    /// Byte order the file was written in.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Take ownership of the pixel grid.
    pub fn into_pixels(self) -> PixelGrid {
        self.pixels
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a complete TIFF file held in memory.
///
/// # Errors
/// - [`DecodeError::Format`] for a malformed header or directory
/// - [`DecodeError::Validation`] for metadata outside the supported profile
/// - [`DecodeError::Range`] if the pixel data does not fit in the buffer
pub fn decode(buffer: &[u8]) -> Result<DecodedImage, DecodeError> {
    let header = TiffHeader::parse(buffer)?;
    let byte_order = header.byte_order;

    let directory = Directory::parse(buffer, header.directory_offset, byte_order)?;
    if let Some(next) = directory.next_directory_offset {
        debug!(next, "ignoring directories after the first");
    }

    let metadata = ImageMetadata::resolve(&directory.entries, buffer, byte_order);
    let validated = validate(&metadata)?;
    let pixels = decode_pixels(buffer, &validated, byte_order)?;

    debug!(
        width = validated.width(),
        height = validated.height(),
        byte_order = byte_order.name(),
        "decoded image"
    );

    Ok(DecodedImage {
        metadata,
        byte_order,
        pixels,
    })
}

/// Read a file into memory and decode it.
///
/// Files larger than `max_bytes` are rejected before they are read.
pub fn decode_file(path: impl AsRef<Path>, max_bytes: u64) -> Result<DecodedImage, LoadError> {
    let data = read_file(path.as_ref(), max_bytes)?;
    Ok(decode(&data)?)
}

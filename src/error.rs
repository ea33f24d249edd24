use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// I/O errors that can occur when loading a file into memory
#[derive(Debug, Clone, Error)]
pub enum IoError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// File exists but could not be read
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    /// File is larger than the configured limit
    #[error("File too large: {path} is {size} bytes, limit is {limit}")]
    FileTooLarge { path: String, size: u64, limit: u64 },

    /// File exists but holds no bytes
    #[error("File is empty: {path}")]
    Empty { path: String },
}

/// Errors in the container structure itself (header and directory).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Buffer is too small to contain the fixed-size header
    #[error("File too small: need at least {required} bytes, got {actual}")]
    FileTooSmall { required: u64, actual: u64 },

    /// The two byte-order marker bytes differ
    #[error("Byte order markers disagree: 0x{first:02X} and 0x{second:02X}")]
    MismatchedByteOrder { first: u8, second: u8 },

    /// Byte-order marker is neither "II" nor "MM"
    #[error("Unknown byte order marker: 0x{0:02X}{0:02X} (expected II or MM)")]
    UnknownByteOrder(u8),

    /// Magic field is not 42
    #[error("Invalid magic value: expected 42, got {0}")]
    InvalidMagic(u64),

    /// Directory offset points at or past the end of the buffer
    #[error("Invalid directory offset: {offset} (buffer is {len} bytes)")]
    InvalidDirectoryOffset { offset: u64, len: u64 },

    /// Buffer ends before all declared directory entries
    #[error("Truncated directory at {offset}: need {required} bytes, buffer has {actual}")]
    TruncatedDirectory {
        offset: u64,
        required: u64,
        actual: u64,
    },
}

impl FormatError {
    /// Name of the header or directory field that was malformed.
    pub const fn field(&self) -> &'static str {
        match self {
            FormatError::FileTooSmall { .. } => "header",
            FormatError::MismatchedByteOrder { .. } | FormatError::UnknownByteOrder(_) => {
                "byte_order"
            }
            FormatError::InvalidMagic(_) => "magic",
            FormatError::InvalidDirectoryOffset { .. } => "directory_offset",
            FormatError::TruncatedDirectory { .. } => "directory",
        }
    }
}

/// Metadata fields the validator can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Width,
    Height,
    BitDepth,
    Compression,
    Photometric,
    FillOrder,
    PixelDataOffset,
    PixelDataByteCount,
    SamplesPerPixel,
    PlanarConfiguration,
}

impl MetadataField {
    pub const fn name(self) -> &'static str {
        match self {
            MetadataField::Width => "width",
            MetadataField::Height => "height",
            MetadataField::BitDepth => "bit_depth",
            MetadataField::Compression => "compression",
            MetadataField::Photometric => "photometric",
            MetadataField::FillOrder => "fill_order",
            MetadataField::PixelDataOffset => "pixel_data_offset",
            MetadataField::PixelDataByteCount => "pixel_data_byte_count",
            MetadataField::SamplesPerPixel => "samples_per_pixel",
            MetadataField::PlanarConfiguration => "planar_configuration",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata that falls outside the supported profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required directory entry was never resolved
    #[error("Missing required field: {0}")]
    Missing(MetadataField),

    /// A field holds a value the profile does not support
    #[error("Unsupported {field}: expected {expected}, got {actual}")]
    Unsupported {
        field: MetadataField,
        expected: u32,
        actual: u32,
    },

    /// Image width or height is zero
    #[error("Invalid {0}: must be greater than zero")]
    ZeroDimension(MetadataField),

    /// Declared pixel byte count does not match the image geometry
    #[error(
        "Invalid pixel_data_byte_count: expected {} bytes for the image geometry, got {actual}",
        expected_bytes(.expected)
    )]
    ByteCountMismatch {
        /// `None` when height * width * bytes per sample overflows
        expected: Option<u64>,
        actual: u32,
    },
}

impl ValidationError {
    /// The metadata field that violated the profile.
    pub const fn field(&self) -> MetadataField {
        match self {
            ValidationError::Missing(field) | ValidationError::ZeroDimension(field) => *field,
            ValidationError::Unsupported { field, .. } => *field,
            ValidationError::ByteCountMismatch { .. } => MetadataField::PixelDataByteCount,
        }
    }
}

fn expected_bytes(expected: &Option<u64>) -> String {
    match expected {
        Some(bytes) => bytes.to_string(),
        None => "an overflowing number of".to_string(),
    }
}

/// A computed read would leave the bounds of the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The pixel data region extends past the end of the buffer
    #[error("Pixel data out of bounds: {len} bytes at offset {offset}, buffer is {size} bytes")]
    PixelRegionOutOfBounds { offset: u64, len: u64, size: u64 },

    /// A sample read would run past the end of the pixel region
    #[error("Sample at ({x}, {y}) reads bytes {start}..{end}, pixel region is {len} bytes")]
    SampleOutOfBounds {
        x: u32,
        y: u32,
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Errors returned by [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Malformed header or directory
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Metadata outside the supported profile
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Metadata and buffer length disagree
    #[error("Range error: {0}")]
    Range(#[from] RangeError),
}

/// Errors returned when decoding straight from a file path.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

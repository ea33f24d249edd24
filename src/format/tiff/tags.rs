//! TIFF tag and field type definitions.
//!
//! This module defines the vocabulary the directory parser and metadata
//! resolver share:
//! - Field types that determine how an entry's value is encoded
//! - Tag IDs for the metadata fields this decoder understands
//! - Named values for the profile-relevant enumerated fields

use serde::Serialize;

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how values are encoded.
///
/// Only the types that can carry a field of the supported profile are
/// defined. Entries with any other type code are kept in the directory but
/// never resolved into metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Two LONGs: numerator then denominator (8 bytes)
    Rational = 5,
}

impl FieldType {
    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Byte => 1,
            FieldType::Short => 2,
            FieldType::Long => 4,
            FieldType::Rational => 8,
        }
    }

    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for unsupported or unknown type values.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            5 => Some(FieldType::Rational),
            _ => None,
        }
    }

    /// Maximum bytes that can be stored inline in a classic TIFF entry.
    pub const INLINE_THRESHOLD: usize = 4;

    /// Check if `count` values of this type fit in the entry's value field.
    #[inline]
    pub fn fits_inline(self, count: u32) -> bool {
        (self.size_in_bytes() as u64) * u64::from(count) <= Self::INLINE_THRESHOLD as u64
    }
}

// =============================================================================
// TIFF Tags
// =============================================================================

/// TIFF tag IDs the metadata resolver maps onto [`ImageMetadata`] fields.
///
/// Tags not listed here are ignored during resolution.
///
/// [`ImageMetadata`]: super::ImageMetadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TiffTag {
    // -------------------------------------------------------------------------
    // Image Structure
    // -------------------------------------------------------------------------
    /// Image width in pixels
    ImageWidth = 0x0100,

    /// Image height (length) in pixels
    ImageLength = 0x0101,

    /// Bits per sample
    BitsPerSample = 0x0102,

    /// Compression scheme used
    Compression = 0x0103,

    /// Photometric interpretation (how sample values map to colour)
    PhotometricInterpretation = 0x0106,

    /// Bit order within a byte
    FillOrder = 0x010A,

    /// Number of components per pixel
    SamplesPerPixel = 0x0115,

    /// How components are organized (chunky vs planar)
    PlanarConfiguration = 0x011C,

    // -------------------------------------------------------------------------
    // Strip Organization
    // -------------------------------------------------------------------------
    /// Byte offset of the (single) strip
    StripOffsets = 0x0111,

    /// Row count per strip
    RowsPerStrip = 0x0116,

    /// Byte count of the (single) strip
    StripByteCounts = 0x0117,

    // -------------------------------------------------------------------------
    // Resolution (informational)
    // -------------------------------------------------------------------------
    /// Pixels per unit in X direction
    XResolution = 0x011A,

    /// Pixels per unit in Y direction
    YResolution = 0x011B,

    /// Unit of resolution (1=none, 2=inch, 3=centimeter)
    ResolutionUnit = 0x0128,
}

impl TiffTag {
    /// Create a TiffTag from its numeric value.
    ///
    /// Returns `None` for unrecognized tags. Unknown tags are not an error;
    /// richer files that still fit the profile carry plenty of them.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0100 => Some(TiffTag::ImageWidth),
            0x0101 => Some(TiffTag::ImageLength),
            0x0102 => Some(TiffTag::BitsPerSample),
            0x0103 => Some(TiffTag::Compression),
            0x0106 => Some(TiffTag::PhotometricInterpretation),
            0x010A => Some(TiffTag::FillOrder),
            0x0111 => Some(TiffTag::StripOffsets),
            0x0115 => Some(TiffTag::SamplesPerPixel),
            0x0116 => Some(TiffTag::RowsPerStrip),
            0x0117 => Some(TiffTag::StripByteCounts),
            0x011A => Some(TiffTag::XResolution),
            0x011B => Some(TiffTag::YResolution),
            0x011C => Some(TiffTag::PlanarConfiguration),
            0x0128 => Some(TiffTag::ResolutionUnit),
            _ => None,
        }
    }
}

// =============================================================================
// Profile Values
// =============================================================================

/// Compression code for uncompressed data, the only one supported.
pub const COMPRESSION_NONE: u32 = 1;

/// Photometric interpretation "BlackIsZero" greyscale.
pub const PHOTOMETRIC_BLACK_IS_ZERO: u32 = 1;

/// Fill order with the most significant bit first.
pub const FILL_ORDER_MSB_FIRST: u32 = 1;

/// The only supported sample depth.
pub const SUPPORTED_BIT_DEPTH: u32 = 16;

/// Chunky (interleaved) planar configuration.
pub const PLANAR_CHUNKY: u32 = 1;

/// TIFF resolution units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionUnit {
    None,
    Inch,
    Centimeter,
}

impl ResolutionUnit {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(ResolutionUnit::None),
            2 => Some(ResolutionUnit::Inch),
            3 => Some(ResolutionUnit::Centimeter),
            _ => None,
        }
    }
}

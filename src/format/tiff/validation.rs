//! Profile validation.
//!
//! Only one narrow profile of TIFF is decoded. Anything outside it is
//! rejected before pixel data is touched, never approximated.
//!
//! # Supported Profile
//!
//! - **Depth**: 16 bits per sample
//! - **Compression**: none (1)
//! - **Colour**: BlackIsZero greyscale (1)
//! - **Fill order**: most significant bit first (1)
//! - **Layout**: one sample per pixel, one strip holding exactly
//!   `width * height * 2` bytes
//!
//! Checks run in that order and the first failure is returned.

use crate::error::{MetadataField, ValidationError};

use super::metadata::ImageMetadata;
use super::tags::{
    COMPRESSION_NONE, FILL_ORDER_MSB_FIRST, PHOTOMETRIC_BLACK_IS_ZERO, PLANAR_CHUNKY,
    SUPPORTED_BIT_DEPTH,
};

// =============================================================================
// ValidatedMetadata
// =============================================================================

/// Metadata that has passed [`validate`].
///
/// The pixel decoder only accepts this type, so it cannot run on metadata
/// that was never checked. Outside this crate it can only be obtained from
/// [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMetadata {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bit_depth: u32,
    pub(crate) pixel_data_offset: u32,
    pub(crate) pixel_data_byte_count: u32,
}

impl ValidatedMetadata {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    pub fn pixel_data_offset(&self) -> u32 {
        self.pixel_data_offset
    }

    pub fn pixel_data_byte_count(&self) -> u32 {
        self.pixel_data_byte_count
    }

    /// Bytes occupied by one sample.
    #[inline]
    pub const fn bytes_per_sample(&self) -> usize {
        (self.bit_depth / 8) as usize
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Check metadata against the supported profile.
pub fn validate(meta: &ImageMetadata) -> Result<ValidatedMetadata, ValidationError> {
    let bit_depth = require_value(meta.bit_depth, MetadataField::BitDepth, SUPPORTED_BIT_DEPTH)?;
    require_value(meta.compression, MetadataField::Compression, COMPRESSION_NONE)?;
    require_value(
        meta.photometric,
        MetadataField::Photometric,
        PHOTOMETRIC_BLACK_IS_ZERO,
    )?;
    require_value(meta.fill_order, MetadataField::FillOrder, FILL_ORDER_MSB_FIRST)?;

    let width = require(meta.width, MetadataField::Width)?;
    let height = require(meta.height, MetadataField::Height)?;
    let byte_count = require(meta.pixel_data_byte_count, MetadataField::PixelDataByteCount)?;

    let expected = u64::from(height)
        .checked_mul(u64::from(width))
        .and_then(|pixels| pixels.checked_mul(u64::from(bit_depth / 8)));
    if expected != Some(u64::from(byte_count)) {
        return Err(ValidationError::ByteCountMismatch {
            expected,
            actual: byte_count,
        });
    }

    let pixel_data_offset = require(meta.pixel_data_offset, MetadataField::PixelDataOffset)?;

    if width == 0 {
        return Err(ValidationError::ZeroDimension(MetadataField::Width));
    }
    if height == 0 {
        return Err(ValidationError::ZeroDimension(MetadataField::Height));
    }

    // Informational fields still have to agree with the profile when present
    if let Some(samples) = meta.samples_per_pixel {
        require_value(Some(samples), MetadataField::SamplesPerPixel, 1)?;
    }
    if let Some(planar) = meta.planar_configuration {
        require_value(Some(planar), MetadataField::PlanarConfiguration, PLANAR_CHUNKY)?;
    }

    Ok(ValidatedMetadata {
        width,
        height,
        bit_depth,
        pixel_data_offset,
        pixel_data_byte_count: byte_count,
    })
}

#[inline]
fn require(value: Option<u32>, field: MetadataField) -> Result<u32, ValidationError> {
    value.ok_or(ValidationError::Missing(field))
}

fn require_value(
    value: Option<u32>,
    field: MetadataField,
    expected: u32,
) -> Result<u32, ValidationError> {
    match require(value, field)? {
        actual if actual == expected => Ok(actual),
        actual => Err(ValidationError::Unsupported {
            field,
            expected,
            actual,
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================

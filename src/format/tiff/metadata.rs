//! Metadata resolution.
//!
//! Folds the directory entries into an [`ImageMetadata`] record through a
//! fixed tag table. Every field starts as `None` and is only set when a
//! matching entry can be resolved to a value, so "absent" is never confused
//! with "zero". Later entries with the same tag overwrite earlier ones.

use serde::Serialize;
use tracing::{debug, trace};

use super::parser::{ByteOrder, DirectoryEntry};
use super::tags::{FieldType, ResolutionUnit, TiffTag};

/// A RATIONAL value: numerator over denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    /// The value as a float, or `None` for a zero denominator.
    pub fn to_f64(self) -> Option<f64> {
        if self.denominator == 0 {
            None
        } else {
            Some(f64::from(self.numerator) / f64::from(self.denominator))
        }
    }
}

/// Metadata resolved from the image directory.
///
/// Only the fields the validator requires (width, height, bit depth,
/// compression, photometric, fill order, pixel data offset and byte count)
/// affect decoding; the rest are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageMetadata {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub bit_depth: Option<u32>,
    pub compression: Option<u32>,
    /// Colour interpretation (PhotometricInterpretation)
    pub photometric: Option<u32>,
    pub fill_order: Option<u32>,
    /// Offset of the single strip (StripOffsets)
    pub pixel_data_offset: Option<u32>,
    pub samples_per_pixel: Option<u32>,
    pub rows_per_strip: Option<u32>,
    /// Length of the single strip (StripByteCounts)
    pub pixel_data_byte_count: Option<u32>,
    pub x_resolution: Option<Rational>,
    pub y_resolution: Option<Rational>,
    pub planar_configuration: Option<u32>,
    pub resolution_unit: Option<u32>,
}

impl ImageMetadata {
    /// Resolve metadata from directory entries.
    ///
    /// `buffer` is the whole file; it is only consulted for RATIONAL
    /// resolution values, which never fit inline. Entries that cannot be
    /// resolved leave their field unset. This never fails.
    pub fn resolve(entries: &[DirectoryEntry], buffer: &[u8], byte_order: ByteOrder) -> Self {
        entries.iter().fold(ImageMetadata::default(), |mut meta, entry| {
            let Some(tag) = TiffTag::from_u16(entry.tag) else {
                trace!(tag = entry.tag, "ignoring unrecognized tag");
                return meta;
            };

            match tag {
                TiffTag::XResolution => meta.x_resolution = read_rational(entry, buffer, byte_order),
                TiffTag::YResolution => meta.y_resolution = read_rational(entry, buffer, byte_order),
                _ => {
                    let value = entry.inline_u32(byte_order);
                    if value.is_none() {
                        debug!(
                            ?tag,
                            field_type = entry.field_type_raw,
                            count = entry.count,
                            "entry value not resolvable inline; leaving unset"
                        );
                    }
                    if let Some(field) = meta.integer_field_mut(tag) {
                        *field = value;
                    }
                }
            }

            meta
        })
    }

    /// The integer field a tag maps onto, or `None` for the rational tags.
    fn integer_field_mut(&mut self, tag: TiffTag) -> Option<&mut Option<u32>> {
        let field = match tag {
            TiffTag::ImageWidth => &mut self.width,
            TiffTag::ImageLength => &mut self.height,
            TiffTag::BitsPerSample => &mut self.bit_depth,
            TiffTag::Compression => &mut self.compression,
            TiffTag::PhotometricInterpretation => &mut self.photometric,
            TiffTag::FillOrder => &mut self.fill_order,
            TiffTag::StripOffsets => &mut self.pixel_data_offset,
            TiffTag::SamplesPerPixel => &mut self.samples_per_pixel,
            TiffTag::RowsPerStrip => &mut self.rows_per_strip,
            TiffTag::StripByteCounts => &mut self.pixel_data_byte_count,
            TiffTag::PlanarConfiguration => &mut self.planar_configuration,
            TiffTag::ResolutionUnit => &mut self.resolution_unit,
            TiffTag::XResolution | TiffTag::YResolution => return None,
        };
        Some(field)
    }

    /// The resolution unit as a named value, when it is a known one.
    pub fn resolution_unit_kind(&self) -> Option<ResolutionUnit> {
        self.resolution_unit.and_then(ResolutionUnit::from_u32)
    }
}

/// Read a single RATIONAL from its out-of-line location.
fn read_rational(entry: &DirectoryEntry, buffer: &[u8], byte_order: ByteOrder) -> Option<Rational> {
    if entry.field_type() != Some(FieldType::Rational) || entry.count != 1 || entry.is_inline() {
        return None;
    }

    let start = entry.value as usize;
    let bytes = buffer.get(start..start.checked_add(8)?)?;

    Some(Rational {
        numerator: byte_order.read_u32(&bytes[0..4]),
        denominator: byte_order.read_u32(&bytes[4..8]),
    })
}

//! Test utilities for integration tests.
//!
//! Provides a builder for hand-assembled TIFF files, so every test states
//! exactly which entries and bytes the decoder sees.

// =============================================================================
// Tag and Type Constants
// =============================================================================

pub const TAG_IMAGE_WIDTH: u16 = 0x0100;
pub const TAG_IMAGE_LENGTH: u16 = 0x0101;
pub const TAG_BITS_PER_SAMPLE: u16 = 0x0102;
pub const TAG_COMPRESSION: u16 = 0x0103;
pub const TAG_PHOTOMETRIC: u16 = 0x0106;
pub const TAG_FILL_ORDER: u16 = 0x010A;
pub const TAG_IMAGE_DESCRIPTION: u16 = 0x010E;
pub const TAG_STRIP_OFFSETS: u16 = 0x0111;
pub const TAG_SAMPLES_PER_PIXEL: u16 = 0x0115;
pub const TAG_ROWS_PER_STRIP: u16 = 0x0116;
pub const TAG_STRIP_BYTE_COUNTS: u16 = 0x0117;
pub const TAG_X_RESOLUTION: u16 = 0x011A;
pub const TAG_Y_RESOLUTION: u16 = 0x011B;
pub const TAG_RESOLUTION_UNIT: u16 = 0x0128;
pub const TAG_SOFTWARE: u16 = 0x0131;

pub const TYPE_BYTE: u16 = 1;
pub const TYPE_ASCII: u16 = 2;
pub const TYPE_SHORT: u16 = 3;
pub const TYPE_LONG: u16 = 4;
pub const TYPE_RATIONAL: u16 = 5;

const HEADER_SIZE: usize = 8;
const ENTRY_SIZE: usize = 12;

// =============================================================================
// TIFF File Builder
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrderType {
    LittleEndian,
    BigEndian,
}

#[derive(Clone, Copy, Debug)]
enum EntryValue {
    Inline(u32),
    /// Resolved to the offset of the pixel data at build time
    PixelDataOffset,
    /// Written after the directory; the entry holds its offset
    Rational(u32, u32),
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    tag: u16,
    field_type: u16,
    count: u32,
    value: EntryValue,
}

/// Builder for single-directory test TIFF files.
///
/// Layout: header, directory at offset 8, next-directory offset, rational
/// values, pixel data.
pub struct TiffBuilder {
    byte_order: ByteOrderType,
    entries: Vec<Entry>,
    next_directory: u32,
    pixel_data: Vec<u8>,
}

impl TiffBuilder {
    /// An empty file: header and a directory with no entries.
    pub fn new(byte_order: ByteOrderType) -> Self {
        Self {
            byte_order,
            entries: Vec::new(),
            next_directory: 0,
            pixel_data: Vec::new(),
        }
    }

    /// A complete 16-bit greyscale image from samples in raster order.
    ///
    /// Dimensions and profile fields use SHORT entries, offsets and counts
    /// LONG, the way common writers lay them out.
    pub fn grey16(byte_order: ByteOrderType, width: u32, height: u32, samples: &[u16]) -> Self {
        assert_eq!(samples.len(), (width * height) as usize);

        let mut builder = Self::new(byte_order);
        for &sample in samples {
            match byte_order {
                ByteOrderType::LittleEndian => builder.pixel_data.extend(sample.to_le_bytes()),
                ByteOrderType::BigEndian => builder.pixel_data.extend(sample.to_be_bytes()),
            }
        }
        let byte_count = builder.pixel_data.len() as u32;

        builder
            .set(TAG_IMAGE_WIDTH, TYPE_SHORT, width)
            .set(TAG_IMAGE_LENGTH, TYPE_SHORT, height)
            .set(TAG_BITS_PER_SAMPLE, TYPE_SHORT, 16)
            .set(TAG_COMPRESSION, TYPE_SHORT, 1)
            .set(TAG_PHOTOMETRIC, TYPE_SHORT, 1)
            .set(TAG_FILL_ORDER, TYPE_SHORT, 1)
            .pixel_data_offset_entry()
            .set(TAG_SAMPLES_PER_PIXEL, TYPE_SHORT, 1)
            .set(TAG_ROWS_PER_STRIP, TYPE_LONG, height)
            .set(TAG_STRIP_BYTE_COUNTS, TYPE_LONG, byte_count)
    }

    /// Set a single-valued entry, replacing any entry with the same tag.
    pub fn set(mut self, tag: u16, field_type: u16, value: u32) -> Self {
        let entry = Entry {
            tag,
            field_type,
            count: 1,
            value: EntryValue::Inline(value),
        };
        match self.entries.iter_mut().find(|e| e.tag == tag) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Append a raw entry without replacing anything (duplicates allowed).
    pub fn push(mut self, tag: u16, field_type: u16, count: u32, value: u32) -> Self {
        self.entries.push(Entry {
            tag,
            field_type,
            count,
            value: EntryValue::Inline(value),
        });
        self
    }

    /// Append a RATIONAL entry stored out of line.
    pub fn rational(mut self, tag: u16, numerator: u32, denominator: u32) -> Self {
        self.entries.push(Entry {
            tag,
            field_type: TYPE_RATIONAL,
            count: 1,
            value: EntryValue::Rational(numerator, denominator),
        });
        self
    }

    /// Remove every entry with this tag.
    pub fn remove(mut self, tag: u16) -> Self {
        self.entries.retain(|e| e.tag != tag);
        self
    }

    /// Replace the pixel bytes without touching any entry.
    pub fn with_pixel_data(mut self, data: Vec<u8>) -> Self {
        self.pixel_data = data;
        self
    }

    /// Declare a following directory at `offset`.
    pub fn with_next_directory(mut self, offset: u32) -> Self {
        self.next_directory = offset;
        self
    }

    fn pixel_data_offset_entry(mut self) -> Self {
        self.entries.push(Entry {
            tag: TAG_STRIP_OFFSETS,
            field_type: TYPE_LONG,
            count: 1,
            value: EntryValue::PixelDataOffset,
        });
        self
    }

    /// Offset at which the pixel data will be written.
    pub fn pixel_data_offset(&self) -> usize {
        let rationals = self
            .entries
            .iter()
            .filter(|e| matches!(e.value, EntryValue::Rational(..)))
            .count();
        HEADER_SIZE + 2 + self.entries.len() * ENTRY_SIZE + 4 + rationals * 8
    }

    /// Build the TIFF file data.
    pub fn build(self) -> Vec<u8> {
        let pixel_offset = self.pixel_data_offset() as u32;
        let mut rational_offset = (HEADER_SIZE + 2 + self.entries.len() * ENTRY_SIZE + 4) as u32;
        let mut rational_data = Vec::new();

        let mut data = Vec::new();
        match self.byte_order {
            ByteOrderType::LittleEndian => data.extend(b"II"),
            ByteOrderType::BigEndian => data.extend(b"MM"),
        }
        self.write_u16(&mut data, 42);
        self.write_u32(&mut data, HEADER_SIZE as u32);

        self.write_u16(&mut data, self.entries.len() as u16);
        for entry in &self.entries {
            self.write_u16(&mut data, entry.tag);
            self.write_u16(&mut data, entry.field_type);
            self.write_u32(&mut data, entry.count);

            let value = match entry.value {
                EntryValue::Inline(value) => value,
                EntryValue::PixelDataOffset => pixel_offset,
                EntryValue::Rational(numerator, denominator) => {
                    self.write_u32(&mut rational_data, numerator);
                    self.write_u32(&mut rational_data, denominator);
                    let offset = rational_offset;
                    rational_offset += 8;
                    offset
                }
            };

            // Single SHORT and BYTE values are left-justified in the field
            match (entry.field_type, entry.count) {
                (TYPE_SHORT, 1) => {
                    self.write_u16(&mut data, value as u16);
                    data.extend([0, 0]);
                }
                (TYPE_BYTE, 1) => data.extend([value as u8, 0, 0, 0]),
                _ => self.write_u32(&mut data, value),
            }
        }
        self.write_u32(&mut data, self.next_directory);

        data.extend(rational_data);
        assert_eq!(data.len(), pixel_offset as usize);
        data.extend(&self.pixel_data);
        data
    }

    fn write_u16(&self, data: &mut Vec<u8>, value: u16) {
        match self.byte_order {
            ByteOrderType::LittleEndian => data.extend(value.to_le_bytes()),
            ByteOrderType::BigEndian => data.extend(value.to_be_bytes()),
        }
    }

    fn write_u32(&self, data: &mut Vec<u8>, value: u32) {
        match self.byte_order {
            ByteOrderType::LittleEndian => data.extend(value.to_le_bytes()),
            ByteOrderType::BigEndian => data.extend(value.to_be_bytes()),
        }
    }
}

// =============================================================================
// Sample Patterns
// =============================================================================

/// Deterministic samples covering the full 16-bit range.
pub fn gradient_samples(width: u32, height: u32) -> Vec<u16> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x * 977 + y * 7919) as u16))
        .collect()
}

/// Create a little-endian 2x2 image with samples 10, 20, 30, 40.
pub fn create_small_tiff() -> Vec<u8> {
    TiffBuilder::grey16(ByteOrderType::LittleEndian, 2, 2, &[10, 20, 30, 40]).build()
}

//! TIFF header and directory parsing.
//!
//! # TIFF Header Structure (8 bytes)
//! ```text
//! Bytes 0-1: Byte order ("II" = little-endian, "MM" = big-endian)
//! Bytes 2-3: Magic (42 = 0x002A)
//! Bytes 4-7: Offset of the image directory (4 bytes)
//! ```
//!
//! # Directory Structure
//! ```text
//! Bytes 0-1:             Entry count N
//! Bytes 2..2+12*N:       N entries of 12 bytes each
//! Bytes 2+12*N..+4:      Offset of the next directory (0 if none)
//! ```
//!
//! # Entry Structure (12 bytes)
//! ```text
//! Bytes 0-1:  Tag
//! Bytes 2-3:  Field type
//! Bytes 4-7:  Value count
//! Bytes 8-11: Value (left-justified) or offset to the value
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::FormatError;
use crate::io::{read_uint_be, read_uint_le};

use super::tags::FieldType;

// =============================================================================
// Constants
// =============================================================================

/// Byte-order marker for little-endian files ('I' for Intel)
const MARKER_LITTLE_ENDIAN: u8 = b'I';

/// Byte-order marker for big-endian files ('M' for Motorola)
const MARKER_BIG_ENDIAN: u8 = b'M';

/// Self-identification value in bytes 2-3
const TIFF_MAGIC: u64 = 42;

/// Size of the TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

/// Size of a directory entry in bytes
pub const DIRECTORY_ENTRY_SIZE: usize = 12;

/// Size of the entry count at the start of a directory
pub const DIRECTORY_COUNT_SIZE: usize = 2;

/// Size of the next-directory offset after the entries
const NEXT_DIRECTORY_OFFSET_SIZE: usize = 4;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of a TIFF file.
///
/// Determined once from the header and then used for every multi-byte read
/// in the same file: header fields, directory entries and pixel samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Assemble an unsigned integer of `bytes.len()` bytes (at most 8).
    #[inline]
    pub fn read_uint(self, bytes: &[u8]) -> u64 {
        match self {
            ByteOrder::LittleEndian => read_uint_le(bytes),
            ByteOrder::BigEndian => read_uint_be(bytes),
        }
    }

    /// Read a u16 from the first two bytes of a slice.
    ///
    /// # Panics
    /// Panics if the slice has fewer than 2 bytes.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        self.read_uint(&bytes[..2]) as u16
    }

    /// Read a u32 from the first four bytes of a slice.
    ///
    /// # Panics
    /// Panics if the slice has fewer than 4 bytes.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        self.read_uint(&bytes[..4]) as u32
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian",
        }
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the file
    pub byte_order: ByteOrder,

    /// Absolute offset of the image directory
    pub directory_offset: u64,
}

impl TiffHeader {
    /// Parse the header from the start of a buffer.
    ///
    /// `bytes` is the whole file; its length bounds the directory offset.
    ///
    /// # Errors
    /// - `FileTooSmall` if there are fewer than 8 bytes
    /// - `MismatchedByteOrder` if bytes 0 and 1 differ
    /// - `UnknownByteOrder` if they agree but are neither 'I' nor 'M'
    /// - `InvalidMagic` if bytes 2-3 are not 42
    /// - `InvalidDirectoryOffset` if the directory lies outside the buffer
    pub fn parse(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < TIFF_HEADER_SIZE {
            return Err(FormatError::FileTooSmall {
                required: TIFF_HEADER_SIZE as u64,
                actual: bytes.len() as u64,
            });
        }

        let byte_order = match (bytes[0], bytes[1]) {
            (first, second) if first != second => {
                return Err(FormatError::MismatchedByteOrder { first, second })
            }
            (MARKER_LITTLE_ENDIAN, _) => ByteOrder::LittleEndian,
            (MARKER_BIG_ENDIAN, _) => ByteOrder::BigEndian,
            (other, _) => return Err(FormatError::UnknownByteOrder(other)),
        };

        let magic = byte_order.read_uint(&bytes[2..4]);
        if magic != TIFF_MAGIC {
            return Err(FormatError::InvalidMagic(magic));
        }

        let directory_offset = byte_order.read_uint(&bytes[4..8]);
        if directory_offset >= bytes.len() as u64 {
            return Err(FormatError::InvalidDirectoryOffset {
                offset: directory_offset,
                len: bytes.len() as u64,
            });
        }

        debug!(
            byte_order = byte_order.name(),
            directory_offset, "parsed TIFF header"
        );

        Ok(TiffHeader {
            byte_order,
            directory_offset,
        })
    }
}

// =============================================================================
// DirectoryEntry
// =============================================================================

/// A single 12-byte directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Tag identifier
    pub tag: u16,

    /// Raw field type code
    pub field_type_raw: u16,

    /// Number of values
    pub count: u32,

    /// Value field read as a 32-bit integer (inline value or offset)
    pub value: u32,

    /// The value field as stored, for left-justified inline values
    pub value_bytes: [u8; 4],
}

impl DirectoryEntry {
    /// Decode an entry from exactly 12 bytes.
    fn parse(bytes: &[u8], byte_order: ByteOrder) -> Self {
        let mut value_bytes = [0u8; 4];
        value_bytes.copy_from_slice(&bytes[8..12]);

        DirectoryEntry {
            tag: byte_order.read_u16(&bytes[0..2]),
            field_type_raw: byte_order.read_u16(&bytes[2..4]),
            count: byte_order.read_u32(&bytes[4..8]),
            value: byte_order.read_u32(&bytes[8..12]),
            value_bytes,
        }
    }

    /// The field type, if it is one this decoder knows.
    #[inline]
    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_u16(self.field_type_raw)
    }

    /// Whether the value is stored in the entry rather than at an offset.
    pub fn is_inline(&self) -> bool {
        self.field_type()
            .map(|ft| ft.fits_inline(self.count))
            .unwrap_or(false)
    }

    /// Read a single inline integer value.
    ///
    /// Returns `Some` only for a single inline value of an integer field
    /// type (BYTE, SHORT or LONG). The value is read from the leading bytes
    /// of the value field, so a SHORT in a big-endian file is not shifted.
    pub fn inline_u32(&self, byte_order: ByteOrder) -> Option<u32> {
        if self.count != 1 || !self.is_inline() {
            return None;
        }

        match self.field_type()? {
            FieldType::Byte => Some(u32::from(self.value_bytes[0])),
            FieldType::Short => Some(u32::from(byte_order.read_u16(&self.value_bytes))),
            FieldType::Long => Some(self.value),
            _ => None,
        }
    }
}

// =============================================================================
// Directory
// =============================================================================

/// A parsed image directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    /// Entries in file order
    pub entries: Vec<DirectoryEntry>,

    /// Offset of a following directory, if the file declares one
    pub next_directory_offset: Option<u64>,
}

impl Directory {
    /// Total size of a directory with `entry_count` entries, excluding the
    /// trailing next-directory offset.
    #[inline]
    pub const fn calculate_size(entry_count: u16) -> usize {
        DIRECTORY_COUNT_SIZE + DIRECTORY_ENTRY_SIZE * entry_count as usize
    }

    /// Parse the directory at `offset` in the whole-file buffer.
    ///
    /// # Errors
    /// `TruncatedDirectory` if the buffer cannot hold the entry count or all
    /// of the declared entries.
    pub fn parse(bytes: &[u8], offset: u64, byte_order: ByteOrder) -> Result<Self, FormatError> {
        let truncated = |required: u64| FormatError::TruncatedDirectory {
            offset,
            required,
            actual: bytes.len() as u64,
        };

        let start = usize::try_from(offset)
            .map_err(|_| truncated(offset.saturating_add(DIRECTORY_COUNT_SIZE as u64)))?;

        let count_end = start
            .checked_add(DIRECTORY_COUNT_SIZE)
            .filter(|&end| end <= bytes.len())
            .ok_or_else(|| truncated(offset.saturating_add(DIRECTORY_COUNT_SIZE as u64)))?;

        let entry_count = byte_order.read_u16(&bytes[start..count_end]);

        let end = start + Self::calculate_size(entry_count);
        if end > bytes.len() {
            return Err(truncated(end as u64));
        }

        let entries: Vec<DirectoryEntry> = bytes[count_end..end]
            .chunks_exact(DIRECTORY_ENTRY_SIZE)
            .map(|chunk| DirectoryEntry::parse(chunk, byte_order))
            .collect();

        // The next-directory offset is optional here; single-image files
        // written by some tools omit it.
        let next_directory_offset = bytes
            .get(end..end + NEXT_DIRECTORY_OFFSET_SIZE)
            .map(|next| byte_order.read_uint(next))
            .filter(|&next| next != 0);

        debug!(
            offset,
            entries = entries.len(),
            ?next_directory_offset,
            "parsed directory"
        );

        Ok(Directory {
            entries,
            next_directory_offset,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

// =============================================================================
// Integer Readers
// =============================================================================
//
// Every multi-byte integer in a TIFF file (header fields, directory entries
// and pixel samples) is assembled by one of these two functions. Nothing else
// in the crate builds integers out of bytes.

/// Assemble an unsigned integer with the first byte least significant.
///
/// Accepts up to 8 bytes. An empty slice yields 0.
#[inline]
pub fn read_uint_le(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8, "integer wider than 64 bits");
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Assemble an unsigned integer with the first byte most significant.
///
/// Accepts up to 8 bytes. An empty slice yields 0.
#[inline]
pub fn read_uint_be(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8, "integer wider than 64 bits");
    bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

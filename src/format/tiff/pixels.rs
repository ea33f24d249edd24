//! Pixel decoding.
//!
//! The strip is stored row by row. The grid is indexed `[x][y]` (column,
//! then row) and kept column-major, so a pixel at raster row `i`, column `j`
//! lands at `x = j`, `y = i`.

use std::ops::Index;

use crate::error::RangeError;

use super::parser::ByteOrder;
use super::validation::ValidatedMetadata;

// =============================================================================
// PixelGrid
// =============================================================================

/// A single-channel grid of 16-bit samples indexed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    /// Column-major: sample `(x, y)` is at `x * height + y`
    samples: Vec<u16>,
}

impl PixelGrid {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of samples in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| x as usize * self.height as usize + y as usize)
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        self.index_of(x, y).map(|i| self.samples[i])
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> u16 {
        self[(x, y)]
    }

    /// All samples of column `x`, top to bottom.
    pub fn column(&self, x: u32) -> Option<&[u16]> {
        if x >= self.width {
            return None;
        }
        let start = x as usize * self.height as usize;
        Some(&self.samples[start..start + self.height as usize])
    }

    /// Samples in storage order (column by column).
    pub fn as_slice(&self) -> &[u16] {
        &self.samples
    }

    /// Iterate over `(x, y, sample)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, u16)> + '_ {
        let height = self.height as usize;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &s)| ((i / height) as u32, (i % height) as u32, s))
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = u16;

    fn index(&self, (x, y): (u32, u32)) -> &u16 {
        match self.index_of(x, y) {
            Some(i) => &self.samples[i],
            None => panic!(
                "pixel ({}, {}) out of bounds for {}x{} grid",
                x, y, self.width, self.height
            ),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Reconstruct the pixel grid from the strip in `buffer`.
///
/// # Errors
/// `RangeError` if the strip or any sample lies outside the buffer. For
/// validated metadata the sample check cannot fire, but it is still made.
pub fn decode_pixels(
    buffer: &[u8],
    meta: &ValidatedMetadata,
    byte_order: ByteOrder,
) -> Result<PixelGrid, RangeError> {
    let offset = meta.pixel_data_offset as usize;
    let len = meta.pixel_data_byte_count as usize;

    let region = offset
        .checked_add(len)
        .and_then(|end| buffer.get(offset..end))
        .ok_or(RangeError::PixelRegionOutOfBounds {
            offset: offset as u64,
            len: len as u64,
            size: buffer.len() as u64,
        })?;

    let width = meta.width as usize;
    let height = meta.height as usize;
    let bytes_per_sample = meta.bytes_per_sample();

    let mut samples = vec![0u16; width * height];

    for i in 0..height {
        for j in 0..width {
            let k = (i * width + j) * bytes_per_sample;
            let bytes = region
                .get(k..k + bytes_per_sample)
                .ok_or(RangeError::SampleOutOfBounds {
                    x: j as u32,
                    y: i as u32,
                    start: k,
                    end: k + bytes_per_sample,
                    len: region.len(),
                })?;

            // bytes_per_sample is 2 for the only supported depth
            samples[j * height + i] = byte_order.read_uint(bytes) as u16;
        }
    }

    Ok(PixelGrid {
        width: meta.width,
        height: meta.height,
        samples,
    })
}

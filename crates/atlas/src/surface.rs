//! Flat RGBA pixel buffer for atlas images

use crate::constants::CHANNELS;
use crate::error::AtlasError;

/// An RGBA `f32` image stored as a flat, interleaved channel list.
///
/// Row 0 is the bottom row of the image, the way the host image store
/// lays out its pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Image dimensions
    pub width: u32,
    pub height: u32,
    /// width * height * 4 channel values, row-major
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Create a new buffer with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * CHANNELS;
        Self {
            width,
            height,
            data: vec![0.0; len],
        }
    }

    /// Wrap existing channel data. The length must be a whole number of rows.
    pub fn from_raw(width: u32, data: Vec<f32>) -> Result<Self, AtlasError> {
        let height = row_count(data.len(), width)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = pixel_offset(x, y, self.width);
        let mut pixel = [0.0; 4];
        pixel.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Some(pixel)
    }

    /// Get raw channel data
    #[inline]
    pub fn channels(&self) -> &[f32] {
        &self.data
    }

    /// Consume the buffer and return its channel data
    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }

    /// Get raw pixel data as bytes, e.g. for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Quantize to 8-bit RGBA with the top row first.
    /// Channels are clamped to 0..1 before quantizing.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let row_len = self.width as usize * CHANNELS;
        if row_len == 0 {
            return Vec::new();
        }
        self.data
            .chunks_exact(row_len)
            .rev()
            .flatten()
            .map(|&c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

/// Offset of the first channel of pixel (x, y) in a flat RGBA buffer
#[inline]
pub fn pixel_offset(x: u32, y: u32, width: u32) -> usize {
    (x as usize + y as usize * width as usize) * CHANNELS
}

/// Number of rows in a flat RGBA buffer of `len` channels
pub(crate) fn row_count(len: usize, width: u32) -> Result<u32, AtlasError> {
    if width == 0 {
        return Err(AtlasError::InvalidWidth);
    }
    let row_len = width as usize * CHANNELS;
    if len % row_len != 0 {
        return Err(AtlasError::BufferSizeMismatch { len, width });
    }
    Ok((len / row_len) as u32)
}

//! RGBA output buffer
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use image::{ImageBuffer, RgbaImage};

use crate::error::{Error, Result};

/// Row-major RGBA pixels, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed (transparent black) buffer.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The RGBA value of one pixel.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * self.width + x) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Copy into an `image` crate buffer.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let width = u32::try_from(self.width).map_err(|_| Error::ImageBufferFailed)?;
        let height = u32::try_from(self.height).map_err(|_| Error::ImageBufferFailed)?;
        ImageBuffer::from_raw(width, height, self.data.clone()).ok_or(Error::ImageBufferFailed)
    }

    /// Encode as PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let img = self.to_rgba_image()?;

        let mut png_data = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_data);
        img.write_with_encoder(encoder)
            .map_err(|e| Error::PngEncodeFailed {
                message: e.to_string(),
            })?;

        Ok(png_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_round_trip_dimensions() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.data_mut()[4..8].copy_from_slice(&[10, 20, 30, 255]);

        let png = buffer.to_png_bytes().unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 0).0, [10, 20, 30, 255]);
        assert_eq!(buffer.pixel(1, 0), [10, 20, 30, 255]);
    }
}

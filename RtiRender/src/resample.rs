//! Nearest-neighbour resampling
//!
//! Decoded images are usually larger than the viewer they are shown in. They
//! are decimated with an index table built like a Bresenham line: source and
//! destination cursors advance independently on an accumulated error, so every
//! destination cell maps to a non-decreasing source index and coverage stays
//! even for non-integer ratios.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use crate::formats::common::CoefficientImage;
use crate::formats::ptm::NormalMap;

/// A sub-rectangle of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    /// The whole of a `width` x `height` image.
    #[must_use]
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Build the destination-to-source index table for one axis.
#[must_use]
pub fn scale_table(src_len: usize, des_len: usize) -> Vec<usize> {
    let mut table = vec![0; des_len];
    let dis = src_len.max(des_len);
    let (mut src, mut des) = (0, 0);
    let (mut src_dis, mut des_dis) = (src_len, des_len);

    for _ in 0..dis {
        if let Some(slot) = table.get_mut(des) {
            *slot = src;
        }
        src_dis += src_len;
        des_dis += des_len;
        if src_dis > dis {
            src += 1;
            src_dis -= dis;
        }
        if des_dis > dis {
            des += 1;
            des_dis -= dis;
        }
    }

    table
}

/// Uniform scale that fits a source image inside a destination box.
pub fn fit_scale(src_width: usize, src_height: usize, des_width: usize, des_height: usize) -> Result<f64> {
    if src_width == 0 || src_height == 0 {
        return Err(invalid_dimensions(src_width, src_height));
    }
    if des_width == 0 || des_height == 0 {
        return Err(invalid_dimensions(des_width, des_height));
    }

    let horizontal = des_width as f64 / src_width as f64;
    let vertical = des_height as f64 / src_height as f64;
    Ok(horizontal.min(vertical))
}

/// Size of a source image after fitting it inside a destination box.
///
/// Each side is rounded and kept at least one pixel.
pub fn fitted_size(
    src_width: usize,
    src_height: usize,
    des_width: usize,
    des_height: usize,
) -> Result<(usize, usize)> {
    let scale = fit_scale(src_width, src_height, des_width, des_height)?;
    let width = ((src_width as f64 * scale).round() as usize).max(1);
    let height = ((src_height as f64 * scale).round() as usize).max(1);
    Ok((width, height))
}

/// Resample a flat pixel buffer with `depth` values per pixel.
///
/// `data_width` is the row length of `src` in pixels; `region` selects the
/// part of the source that is stretched over `des_width` x `des_height`.
pub fn resample<T: Copy>(
    src: &[T],
    data_width: usize,
    depth: usize,
    region: Region,
    des_width: usize,
    des_height: usize,
) -> Result<Vec<T>> {
    if des_width == 0 || des_height == 0 {
        return Err(invalid_dimensions(des_width, des_height));
    }
    if region.width == 0 || region.height == 0 || data_width == 0 || depth == 0 {
        return Err(invalid_dimensions(region.width, region.height));
    }

    let data_height = src.len() / (data_width * depth);
    if region.x + region.width > data_width || region.y + region.height > data_height {
        return Err(Error::InvalidRegion {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            source_width: data_width,
            source_height: data_height,
        });
    }

    let table_x = scale_table(region.width, des_width);
    let table_y = scale_table(region.height, des_height);

    let mut out = Vec::with_capacity(des_width * des_height * depth);
    for &row in &table_y {
        let sum = (row + region.y) * data_width;
        for &col in &table_x {
            let offset = (sum + col + region.x) * depth;
            out.extend_from_slice(&src[offset..offset + depth]);
        }
    }

    Ok(out)
}

impl CoefficientImage {
    /// Resample a region of this image to a new size.
    pub fn resample(&self, region: Region, des_width: usize, des_height: usize) -> Result<Self> {
        let data = resample(self.data(), self.width(), self.depth(), region, des_width, des_height)?;
        Self::from_data(des_width, des_height, self.dimension(), self.terms(), data)
    }
}

impl NormalMap {
    /// Resample a region of this normal map to a new size.
    pub fn resample(&self, region: Region, des_width: usize, des_height: usize) -> Result<Self> {
        let data = resample(self.as_slice(), self.width(), 1, region, des_width, des_height)?;
        Self::from_vec(des_width, des_height, data)
    }
}

fn invalid_dimensions(width: usize, height: usize) -> Error {
    Error::InvalidDimensions {
        width: i64::try_from(width).unwrap_or(i64::MAX),
        height: i64::try_from(height).unwrap_or(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_monotonic_within(table: &[usize], src_len: usize) {
        assert!(table.windows(2).all(|w| w[0] <= w[1]), "{table:?} not monotonic");
        assert!(table.iter().all(|&i| i < src_len), "{table:?} out of range");
    }

    #[test]
    fn test_downscale_table() {
        let table = scale_table(4, 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table, vec![1, 3]);
        assert_monotonic_within(&table, 4);
    }

    #[test]
    fn test_upscale_and_identity_tables() {
        assert_eq!(scale_table(2, 4), vec![0, 0, 1, 1]);
        assert_eq!(scale_table(3, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_tables_cover_source_evenly() {
        for (src, des) in [(7, 3), (100, 37), (37, 100), (641, 320), (5, 1)] {
            let table = scale_table(src, des);
            assert_eq!(table.len(), des);
            assert_monotonic_within(&table, src);
        }
    }

    #[test]
    fn test_fit_scale_keeps_aspect() {
        assert_eq!(fit_scale(640, 480, 320, 470).unwrap(), 0.5);
        assert_eq!(fit_scale(100, 400, 320, 200).unwrap(), 0.5);
        assert_eq!(fitted_size(640, 480, 320, 470).unwrap(), (320, 240));
        assert_eq!(fitted_size(1000, 1, 10, 10).unwrap(), (10, 1));
    }

    #[test]
    fn test_fit_scale_rejects_empty() {
        assert!(matches!(fit_scale(0, 10, 5, 5), Err(Error::InvalidDimensions { .. })));
        assert!(fit_scale(10, 10, 5, 0).is_err());
    }

    #[test]
    fn test_resample_with_depth() {
        // 4x1 image, two values per pixel
        let src = [0, 1, 10, 11, 20, 21, 30, 31];
        let out = resample(&src, 4, 2, Region::full(4, 1), 2, 1).unwrap();
        assert_eq!(out, vec![10, 11, 30, 31]);
    }

    #[test]
    fn test_resample_region() {
        // 3x3 image, pick the bottom-right 2x2 block unchanged
        let src: Vec<u32> = (0..9).collect();
        let region = Region {
            x: 1,
            y: 1,
            width: 2,
            height: 2,
        };
        assert_eq!(resample(&src, 3, 1, region, 2, 2).unwrap(), vec![4, 5, 7, 8]);

        let too_wide = Region { width: 3, ..region };
        assert!(matches!(
            resample(&src, 3, 1, too_wide, 2, 2),
            Err(Error::InvalidRegion { .. })
        ));
        assert!(resample(&src, 3, 1, region, 0, 2).is_err());
    }

    #[test]
    fn test_coefficient_image_resample() {
        let data: Vec<f64> = (0..16).map(f64::from).collect();
        let image = CoefficientImage::from_data(4, 2, 1, 2, data).unwrap();
        let small = image.resample(Region::full(4, 2), 2, 1).unwrap();
        assert_eq!((small.width(), small.height(), small.terms()), (2, 1, 2));
        assert_eq!(small.data(), &[10.0, 11.0, 14.0, 15.0]);
    }
}

//! Reflectance image formats
//!
//! - **HSH** (`.rti`, `.hsh`) - hemispherical harmonics coefficients
//! - **PTM** (`.ptm`) - polynomial texture maps, `LRGB` layout
//!
//! The format is chosen from the file extension, never sniffed from content.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod common;
pub mod hsh;
pub mod ptm;

use std::path::Path;

use crate::error::{Error, Result};
use crate::resample::{Region, fitted_size};

pub use common::CoefficientImage;
pub use hsh::{HshHeader, HshImage};
pub use ptm::{NormalMap, PtmHeader, PtmImage, PtmVersion};

/// Supported reflectance formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtiFormat {
    /// Hemispherical harmonics RTI.
    Hsh,
    /// Polynomial texture map.
    Ptm,
}

impl RtiFormat {
    /// Pick the format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.trim().to_lowercase().as_str() {
            "rti" | "hsh" => Ok(Self::Hsh),
            "ptm" => Ok(Self::Ptm),
            _ => Err(Error::UnsupportedExtension(ext.to_string())),
        }
    }

    /// Pick the format from a file path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hsh => "HSH",
            Self::Ptm => "PTM",
        }
    }
}

/// A decoded image of either format.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedImage {
    Hsh(HshImage),
    Ptm(PtmImage),
}

impl DecodedImage {
    /// Decode raw file bytes in the given format.
    pub fn decode(data: &[u8], format: RtiFormat) -> Result<Self> {
        match format {
            RtiFormat::Hsh => hsh::decode(data).map(Self::Hsh),
            RtiFormat::Ptm => ptm::decode(data).map(Self::Ptm),
        }
    }

    #[must_use]
    pub fn format(&self) -> RtiFormat {
        match self {
            Self::Hsh(_) => RtiFormat::Hsh,
            Self::Ptm(_) => RtiFormat::Ptm,
        }
    }

    #[must_use]
    pub fn coefficients(&self) -> &CoefficientImage {
        match self {
            Self::Hsh(image) => &image.coefficients,
            Self::Ptm(image) => &image.coefficients,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.coefficients().width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.coefficients().height()
    }

    /// Resample a region of the image to a new size.
    ///
    /// PTM normal maps are resampled with the same tables as the coefficients.
    pub fn resample(&self, region: Region, des_width: usize, des_height: usize) -> Result<Self> {
        match self {
            Self::Hsh(image) => {
                let coefficients = image.coefficients.resample(region, des_width, des_height)?;
                Ok(Self::Hsh(HshImage {
                    header: HshHeader {
                        width: des_width,
                        height: des_height,
                        ..image.header
                    },
                    scale: image.scale.clone(),
                    bias: image.bias.clone(),
                    coefficients,
                }))
            }
            Self::Ptm(image) => {
                let coefficients = image.coefficients.resample(region, des_width, des_height)?;
                let normals = image.normals.resample(region, des_width, des_height)?;
                Ok(Self::Ptm(PtmImage {
                    header: PtmHeader {
                        width: des_width,
                        height: des_height,
                        ..image.header.clone()
                    },
                    coefficients,
                    normals,
                }))
            }
        }
    }

    /// Shrink or grow the image to fit inside `max_width` x `max_height`,
    /// keeping its aspect ratio.
    pub fn fit_within(&self, max_width: usize, max_height: usize) -> Result<Self> {
        let (width, height) = fitted_size(self.width(), self.height(), max_width, max_height)?;
        tracing::debug!(
            "Fitting {}x{} into {}x{} -> {}x{}",
            self.width(),
            self.height(),
            max_width,
            max_height,
            width,
            height
        );
        self.resample(Region::full(self.width(), self.height()), width, height)
    }
}

/// Decode raw file bytes in the given format.
pub fn decode(data: &[u8], format: RtiFormat) -> Result<DecodedImage> {
    DecodedImage::decode(data, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(RtiFormat::from_extension("rti").unwrap(), RtiFormat::Hsh);
        assert_eq!(RtiFormat::from_extension("HSH").unwrap(), RtiFormat::Hsh);
        assert_eq!(RtiFormat::from_extension("ptm").unwrap(), RtiFormat::Ptm);
        assert!(matches!(
            RtiFormat::from_extension("png"),
            Err(Error::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(RtiFormat::from_path("scans/coin.Ptm").unwrap(), RtiFormat::Ptm);
        assert_eq!(RtiFormat::from_path("a.b/vase.rti").unwrap(), RtiFormat::Hsh);
        assert!(RtiFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_fit_within_resamples_normals() {
        let mut data = b"PTM_1.1\nPTM_FORMAT_LRGB\n4\n2\n1 1 1 1 1 1\n0 0 0 0 0 0\n".to_vec();
        for i in 0..8u8 {
            data.extend_from_slice(&[0, 0, 0, i * 10, 0, i]);
            data.extend_from_slice(&[i, i, i]);
        }
        let image = DecodedImage::decode(&data, RtiFormat::Ptm).unwrap();
        let fitted = image.fit_within(2, 2).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (2, 1));

        let DecodedImage::Ptm(ptm) = fitted else {
            panic!("expected PTM");
        };
        assert_eq!((ptm.header.width, ptm.header.height), (2, 1));
        assert_eq!((ptm.normals.width(), ptm.normals.height()), (2, 1));
    }
}

//! PTM (Polynomial Texture Map) decoding
//!
//! Only the `PTM_FORMAT_LRGB` layout is supported: six biquadratic luminance
//! coefficients per pixel plus an RGB base colour. The colour bytes are
//! interleaved with the coefficients in version 1.1, stored as a second block
//! in version 1.2, and absent in version 1.0.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod normal;
mod reader;

use std::fmt;

use glam::DVec3;

use crate::error::{Error, Result};
use crate::formats::common::CoefficientImage;

pub use normal::{ZERO_TOLERANCE, calculate_normal};
pub use reader::{decode, read_header};

/// The only supported PTM format type.
pub const PTM_FORMAT_LRGB: &str = "PTM_FORMAT_LRGB";

/// Values stored per PTM pixel: six coefficients then R, G, B.
pub const PTM_TERMS: usize = 9;

/// Number of biquadratic coefficients.
pub const PTM_COEFFICIENTS: usize = 6;

/// Slot of the red base-colour value within a pixel.
pub const RGB_OFFSET: usize = 6;

/// Base colour used when the file carries no RGB data (version 1.0).
pub const DEFAULT_BASE_COLOR: [u8; 3] = [255, 255, 255];

/// PTM file version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtmVersion {
    /// No RGB payload.
    V1_0,
    /// RGB bytes follow each pixel's coefficients.
    V1_1,
    /// RGB bytes follow the whole coefficient block.
    V1_2,
}

impl PtmVersion {
    /// Parse a version line such as `PTM_1.2`.
    pub fn parse(line: &str) -> Result<Self> {
        let bytes = line.as_bytes();
        let well_formed = bytes.len() == 7
            && line.starts_with("PTM_")
            && bytes[4].is_ascii_digit()
            && bytes[5] == b'.'
            && bytes[6].is_ascii_digit();
        if !well_formed {
            return Err(Error::InvalidPtmVersion(line.to_string()));
        }

        match &line[4..] {
            "1.0" => Ok(Self::V1_0),
            "1.1" => Ok(Self::V1_1),
            "1.2" => Ok(Self::V1_2),
            _ => Err(Error::UnsupportedPtmVersion(line.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1_0 => "PTM_1.0",
            Self::V1_1 => "PTM_1.1",
            Self::V1_2 => "PTM_1.2",
        }
    }
}

impl fmt::Display for PtmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed PTM header fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PtmHeader {
    pub version: PtmVersion,
    /// Format type string, always [`PTM_FORMAT_LRGB`] once validated.
    pub format: String,
    pub width: usize,
    pub height: usize,
    pub scale: [f64; PTM_COEFFICIENTS],
    pub bias: [f64; PTM_COEFFICIENTS],
}

/// Per-pixel surface normals reconstructed from PTM coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalMap {
    width: usize,
    height: usize,
    normals: Vec<DVec3>,
}

impl NormalMap {
    /// Wrap row-major normals.
    pub fn from_vec(width: usize, height: usize, normals: Vec<DVec3>) -> Result<Self> {
        let len = width.checked_mul(height).ok_or(Error::InvalidDimensions {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        })?;
        if normals.len() != len {
            return Err(Error::LengthMismatch {
                left: normals.len(),
                right: len,
            });
        }
        Ok(Self {
            width,
            height,
            normals,
        })
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
    pub fn get(&self, x: usize, y: usize) -> DVec3 {
        self.normals[y * self.width + x]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[DVec3] {
        &self.normals
    }
}

/// A decoded PTM image.
///
/// The coefficient image has one channel of [`PTM_TERMS`] values: the six
/// quantized coefficients followed by the R, G, B base colour.
#[derive(Debug, Clone, PartialEq)]
pub struct PtmImage {
    pub header: PtmHeader,
    pub coefficients: CoefficientImage,
    pub normals: NormalMap,
}

impl PtmImage {
    /// The six luminance coefficients of a pixel.
    #[must_use]
    pub fn luminance_coefficients(&self, x: usize, y: usize) -> [f64; PTM_COEFFICIENTS] {
        let mut a = [0.0; PTM_COEFFICIENTS];
        a.copy_from_slice(&self.coefficients.pixel(x, y)[..PTM_COEFFICIENTS]);
        a
    }

    /// The RGB base colour of a pixel.
    #[must_use]
    pub fn base_color(&self, x: usize, y: usize) -> [f64; 3] {
        let pixel = self.coefficients.pixel(x, y);
        [
            pixel[RGB_OFFSET],
            pixel[RGB_OFFSET + 1],
            pixel[RGB_OFFSET + 2],
        ]
    }
}

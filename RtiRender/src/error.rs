//! Error types for `RtiRender`
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use thiserror::Error;

/// The error type for `RtiRender` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Format Errors ====================
    /// A header field is missing or could not be parsed.
    #[error("invalid header field '{field}': {message}")]
    InvalidHeader {
        /// The header field being read.
        field: &'static str,
        /// Description of what is invalid.
        message: String,
    },

    /// The PTM version line does not look like `PTM_<digit>.<digit>`.
    #[error("invalid PTM version line: {0:?}")]
    InvalidPtmVersion(String),

    /// The PTM version is well formed but not one we can decode.
    #[error("unsupported PTM version: {0} (supported: PTM_1.0, PTM_1.1, PTM_1.2)")]
    UnsupportedPtmVersion(String),

    /// The PTM format type is not `PTM_FORMAT_LRGB`.
    #[error("unsupported PTM format: {0} (supported: PTM_FORMAT_LRGB)")]
    UnsupportedPtmFormat(String),

    /// The PTM scale/bias line has the wrong number of values.
    #[error("expected 6 or 12 scale/bias values, found {0}")]
    InvalidScaleBiasCount(usize),

    /// The HSH basis has more terms than weights are defined for.
    #[error("unsupported HSH term count: {0} (supported: 1-16)")]
    UnsupportedTermCount(usize),

    /// The HSH colour dimension cannot be mapped onto RGB output.
    #[error("unsupported colour dimension: {0} (supported: 1-3)")]
    UnsupportedDimension(usize),

    /// The file extension does not name a known reflectance format.
    #[error("unsupported file extension: {0:?} (expected rti, hsh or ptm)")]
    UnsupportedExtension(String),

    // ==================== Truncation Errors ====================
    /// The stream ended before the header promised.
    #[error("truncated input while reading {section}: expected {expected} bytes, {available} available")]
    TruncatedInput {
        /// The part of the file being read.
        section: &'static str,
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes left in the stream.
        available: usize,
    },

    // ==================== Dimension Errors ====================
    /// Width or height is zero, negative, or overflows the address space.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// The requested width.
        width: i64,
        /// The requested height.
        height: i64,
    },

    /// A resample region does not fit inside the source image.
    #[error("region {width}x{height} at ({x}, {y}) exceeds source {source_width}x{source_height}")]
    InvalidRegion {
        /// Left edge of the region.
        x: usize,
        /// Top edge of the region.
        y: usize,
        /// Region width.
        width: usize,
        /// Region height.
        height: usize,
        /// Source image width.
        source_width: usize,
        /// Source image height.
        source_height: usize,
    },

    // ==================== Arithmetic Errors ====================
    /// Two vectors of different lengths were combined.
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Division or normalization by zero.
    #[error("divisor is zero")]
    ZeroDivisor,

    // ==================== Output / Config Errors ====================
    /// Failed to create an image buffer from pixel data.
    #[error("failed to create image buffer")]
    ImageBufferFailed,

    /// Failed to encode PNG image.
    #[error("failed to encode PNG: {message}")]
    PngEncodeFailed {
        /// The encoding error message.
        message: String,
    },

    /// Failed to parse a render configuration file.
    #[error("failed to parse config: {message}")]
    ConfigParse {
        /// The parser error message.
        message: String,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidHeader`].
    pub(crate) fn header(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            field,
            message: message.into(),
        }
    }

    /// Whether this error describes malformed or unsupported input data.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidHeader { .. }
                | Self::InvalidPtmVersion(_)
                | Self::UnsupportedPtmVersion(_)
                | Self::UnsupportedPtmFormat(_)
                | Self::InvalidScaleBiasCount(_)
                | Self::UnsupportedTermCount(_)
                | Self::UnsupportedDimension(_)
                | Self::UnsupportedExtension(_)
        )
    }
}

/// Result type alias for `RtiRender` operations.
pub type Result<T> = std::result::Result<T, Error>;

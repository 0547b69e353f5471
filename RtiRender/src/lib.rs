#![allow(non_snake_case)]
//! # RtiRender
//!
//! A pure-Rust library for decoding and relighting reflectance transformation
//! images.
//!
//! ## Supported Formats
//!
//! - **HSH** (`.rti`, `.hsh`) - hemispherical harmonics, up to 16 terms
//! - **PTM** (`.ptm`) - polynomial texture maps, `PTM_FORMAT_LRGB`, versions 1.0-1.2
//!
//! ## Quick Start
//!
//! ### Rendering a File to PNG
//!
//! ```no_run
//! use rtirender::config::RenderConfig;
//! use rtirender::converter::convert_to_png;
//!
//! // Light from the upper left of the pad
//! convert_to_png("coin.ptm", "coin.png", &RenderConfig::default(), -60.0, 40.0)?;
//! # Ok::<(), rtirender::Error>(())
//! ```
//!
//! ### Decoding Once, Relighting Many Times
//!
//! ```no_run
//! use rtirender::prelude::*;
//!
//! let image = decode_file("vase.rti")?;
//! let pad = LightPad::default();
//! let mut buffer = PixelBuffer::new(image.width(), image.height());
//! for ly in [-90.0, 0.0, 90.0] {
//!     render_into(&image, &pad.direction(0.0, ly), &RenderOptions::default(), &mut buffer)?;
//! }
//! # Ok::<(), rtirender::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `rtirender` command-line binary
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod light;
pub mod render;
pub mod resample;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{
        CoefficientImage, DecodedImage, HshImage, NormalMap, PtmImage, RtiFormat, decode,
    };
    pub use crate::light::{LightDirection, LightPad};
    pub use crate::render::{PixelBuffer, RenderOptions, basis_weights, render, render_into};
    pub use crate::config::RenderConfig;
    pub use crate::resample::{Region, scale_table};
    pub use crate::utils::decode_ieee754_le;

    pub use crate::converter::{
        convert_to_png, decode_file, render_bytes_to_png, render_image_to_png,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

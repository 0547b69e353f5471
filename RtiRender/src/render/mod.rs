//! Light-dependent reconstruction of decoded images into RGBA pixels
//!
//! Rendering is a pure function of a decoded image, a light direction and the
//! shading options. The same decoded image can be relit any number of times.
//!
//! ```no_run
//! use rtirender::prelude::*;
//!
//! let bytes = std::fs::read("coin.ptm")?;
//! let image = DecodedImage::decode(&bytes, RtiFormat::Ptm)?;
//! let pad = LightPad::default();
//! for lx in [-80.0, 0.0, 80.0] {
//!     let pixels = render(&image, &pad.direction(lx, 20.0), &RenderOptions::default())?;
//!     println!("{} bytes", pixels.data().len());
//! }
//! # Ok::<(), rtirender::Error>(())
//! ```
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod buffer;
pub mod hsh;
pub mod ptm;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formats::DecodedImage;
use crate::light::LightDirection;

pub use buffer::PixelBuffer;
pub use hsh::basis_weights;
pub use ptm::luminance;

/// Optional PTM shading terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Scale the base colour by the diffuse term.
    pub diffuse: bool,
    /// Add a specular highlight.
    pub specular: bool,
}

/// Render a decoded image under a light direction.
pub fn render(
    image: &DecodedImage,
    light: &LightDirection,
    options: &RenderOptions,
) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::new(image.width(), image.height());
    render_into(image, light, options, &mut buffer)?;
    Ok(buffer)
}

/// Render into a caller-owned buffer of matching size.
pub fn render_into(
    image: &DecodedImage,
    light: &LightDirection,
    options: &RenderOptions,
    buffer: &mut PixelBuffer,
) -> Result<()> {
    if buffer.width() != image.width() || buffer.height() != image.height() {
        return Err(Error::LengthMismatch {
            left: buffer.data().len(),
            right: image.width() * image.height() * 4,
        });
    }

    match image {
        DecodedImage::Hsh(hsh) => {
            if options.diffuse || options.specular {
                tracing::debug!("Shading options only apply to PTM images, ignoring");
            }
            hsh::render_hsh(hsh, light, buffer);
            Ok(())
        }
        DecodedImage::Ptm(ptm) => ptm::render_ptm(ptm, light, options, buffer),
    }
}

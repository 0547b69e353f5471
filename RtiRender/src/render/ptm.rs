//! Polynomial texture map relighting with optional diffuse/specular shading
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use crate::formats::ptm::{PTM_COEFFICIENTS, PtmImage};
use crate::light::LightDirection;
use crate::utils::{add, clamp, divide, dot, normalize, round_half_up, subtract};

use super::{PixelBuffer, RenderOptions};

/// Diffuse reflection coefficient.
pub const KD: f64 = 0.4;

/// Specular reflection coefficient.
pub const KS: f64 = 0.7;

/// Specular exponent.
pub const SHININESS: i32 = 15;

/// Fixed viewer direction.
const VIEWPOINT: [f64; 3] = [0.0, 0.0, 1.0];

/// Evaluate the biquadratic luminance polynomial at `(lx, ly)`.
#[must_use]
pub fn luminance(a: &[f64; PTM_COEFFICIENTS], lx: f64, ly: f64) -> f64 {
    a[0] * lx * lx + a[1] * ly * ly + a[2] * lx * ly + a[3] * lx + a[4] * ly + a[5]
}

/// Relight a PTM image into `buffer`.
pub(super) fn render_ptm(
    image: &PtmImage,
    light: &LightDirection,
    options: &RenderOptions,
    buffer: &mut PixelBuffer,
) -> Result<()> {
    let width = image.coefficients.width();
    let height = image.coefficients.height();
    let light_v = light.to_array();
    let shaded = options.diffuse || options.specular;

    // Half-diagonal, so image-plane offsets stay within the unit disk
    let half_diagonal = ((width * width + height * height) as f64).sqrt() / 2.0;

    let out = buffer.data_mut();
    for y in 0..height {
        for x in 0..width {
            let a = image.luminance_coefficients(x, y);
            let mut rgb = image.base_color(x, y);
            let lum = luminance(&a, light.x(), light.y()) / 255.0;

            if shaded {
                let u = (x as f64 - width as f64 / 2.0) / half_diagonal;
                let v = (height as f64 / 2.0 - y as f64) / half_diagonal;
                // A rim light can cancel a corner offset exactly
                let light_dir = match normalize(&subtract(&light_v, &[u, v, 0.0])?) {
                    Err(Error::ZeroDivisor) => light_v.to_vec(),
                    result => result?,
                };
                let normal = image.normals.get(x, y).to_array();

                if options.diffuse {
                    let diffuse = clamp(dot(&light_v, &normal)?, 0.0, 1.0);
                    rgb = rgb.map(|c| round_half_up(c * KD * diffuse));
                }

                if options.specular {
                    let half = normalize(&divide(&add(&VIEWPOINT, &light_dir)?, 2.0)?)?;
                    let specular =
                        clamp(dot(&half, &normal)?, 0.0, 1.0).powi(SHININESS) * KS * 255.0;
                    rgb = rgb.map(|c| round_half_up((c * KD + specular) * lum));
                }
            } else {
                rgb = rgb.map(|c| round_half_up(c * lum));
            }

            let idx = (y * width + x) * 4;
            for (slot, value) in out[idx..idx + 3].iter_mut().zip(rgb) {
                *slot = clamp(value, 0.0, 255.0) as u8;
            }
            out[idx + 3] = 255;
        }
    }

    Ok(())
}

//! Hemispherical harmonics relighting
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::f64::consts::PI;

use crate::formats::HshImage;
use crate::formats::hsh::MAX_TERMS;
use crate::light::LightDirection;
use crate::utils::{clamp, round_half_up};

use super::PixelBuffer;

/// Evaluate the 16 hemispherical harmonics basis weights for a light direction.
///
/// Weights are shared by every pixel, so they are computed once per render.
#[must_use]
pub fn basis_weights(light: &LightDirection) -> [f64; MAX_TERMS] {
    let mut phi = light.y().atan2(light.x());
    if phi < 0.0 {
        phi += 2.0 * PI;
    }
    let theta = light.z().clamp(-1.0, 1.0).acos();

    let ct = theta.cos();
    let ct2 = ct * ct;
    // sin-like factor of the hemispherical basis; clamp guards rounding below zero
    let st = (ct - ct2).max(0.0);
    let sst = st.sqrt();
    let st3 = st.powf(1.5);

    [
        1.0 / (2.0 * PI).sqrt(),
        (6.0 / PI).sqrt() * (phi.cos() * sst),
        (3.0 / (2.0 * PI)).sqrt() * (-1.0 + 2.0 * ct),
        (6.0 / PI).sqrt() * (sst * phi.sin()),
        (30.0 / PI).sqrt() * ((2.0 * phi).cos() * (-ct + ct2)),
        (30.0 / PI).sqrt() * (phi.cos() * (-1.0 + 2.0 * ct) * sst),
        (5.0 / (2.0 * PI)).sqrt() * (1.0 - 6.0 * ct + 6.0 * ct2),
        (30.0 / PI).sqrt() * ((-1.0 + 2.0 * ct) * sst * phi.sin()),
        (30.0 / PI).sqrt() * ((-ct + ct2) * (2.0 * phi).sin()),
        2.0 * (35.0 / PI).sqrt() * (3.0 * phi).cos() * st3,
        (210.0 / PI).sqrt() * (2.0 * phi).cos() * (-1.0 + 2.0 * ct) * (-ct + ct2),
        2.0 * (21.0 / PI).sqrt() * phi.cos() * sst * (1.0 - 5.0 * ct + 5.0 * ct2),
        (7.0 / (2.0 * PI)).sqrt() * (-1.0 + 12.0 * ct - 30.0 * ct2 + 20.0 * ct2 * ct),
        2.0 * (21.0 / PI).sqrt() * sst * (1.0 - 5.0 * ct + 5.0 * ct2) * phi.sin(),
        (210.0 / PI).sqrt() * (-1.0 + 2.0 * ct) * (-ct + ct2) * (2.0 * phi).sin(),
        2.0 * (35.0 / PI).sqrt() * st3 * (3.0 * phi).sin(),
    ]
}

/// Relight an HSH image into `buffer`.
pub(super) fn render_hsh(image: &HshImage, light: &LightDirection, buffer: &mut PixelBuffer) {
    let weights = basis_weights(light);
    let coefficients = &image.coefficients;
    let (dimension, terms) = (coefficients.dimension(), coefficients.terms());

    for (pixel, out) in coefficients
        .data()
        .chunks_exact(dimension * terms)
        .zip(buffer.data_mut().chunks_exact_mut(4))
    {
        for (channel, values) in pixel.chunks_exact(terms).enumerate() {
            let value: f64 = values.iter().zip(&weights).map(|(c, w)| c * w).sum();
            let byte = round_half_up(clamp(value, 0.0, 1.0) * 255.0) as u8;
            if dimension == 1 {
                out[..3].fill(byte);
            } else {
                out[channel] = byte;
            }
        }
        out[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::LightPad;

    #[test]
    fn test_constant_weight_is_direction_independent() {
        let expected = 1.0 / (2.0 * PI).sqrt();
        let pad = LightPad::default();
        for (lx, ly) in [(0.0, 0.0), (100.0, 0.0), (-30.0, 70.0), (500.0, -500.0)] {
            assert_eq!(basis_weights(&pad.direction(lx, ly))[0], expected);
        }
    }

    #[test]
    fn test_overhead_weights() {
        // Straight overhead: theta = 0, every sin(theta) factor vanishes
        let w = basis_weights(&LightDirection::overhead());
        assert!((w[2] - (3.0 / (2.0 * PI)).sqrt()).abs() < 1e-12);
        assert!((w[6] - (5.0 / (2.0 * PI)).sqrt()).abs() < 1e-12);
        assert!((w[12] - (7.0 / (2.0 * PI)).sqrt()).abs() < 1e-12);
        for i in [1, 3, 4, 5, 7, 8, 9, 10, 11, 13, 14, 15] {
            assert!(w[i].abs() < 1e-12, "weight {i} = {}", w[i]);
        }
    }

    #[test]
    fn test_azimuth_symmetry() {
        // Mirroring the light across the x axis flips the sin(m*phi) terms only
        let pad = LightPad::default();
        let up = basis_weights(&pad.direction(40.0, 30.0));
        let down = basis_weights(&pad.direction(40.0, -30.0));
        for i in [0, 1, 2, 4, 5, 6, 9, 10, 11, 12] {
            assert!((up[i] - down[i]).abs() < 1e-9, "cos term {i} differs");
        }
        for i in [3, 7, 8, 13, 14, 15] {
            assert!((up[i] + down[i]).abs() < 1e-9, "sin term {i} did not flip");
        }
    }
}

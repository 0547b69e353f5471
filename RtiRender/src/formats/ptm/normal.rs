//! Surface normal reconstruction from biquadratic coefficients
//!
//! The luminance model `L(u, v) = a0 u^2 + a1 v^2 + a2 uv + a3 u + a4 v + a5`
//! peaks where its gradient vanishes; that point is the projection of the
//! surface normal onto the image plane.

use glam::DVec3;

use super::PTM_COEFFICIENTS;

/// Threshold below which a coefficient or determinant counts as zero.
pub const ZERO_TOLERANCE: f64 = 1e-5;

/// Reconstruct a unit normal from six quantized PTM coefficients.
#[must_use]
pub fn calculate_normal(coefficients: &[f64; PTM_COEFFICIENTS]) -> DVec3 {
    let a = coefficients.map(|c| c / 256.0);

    // No quadratic or linear response at all: the surface faces the viewer
    if [a[0], a[1], a[3], a[4]]
        .iter()
        .all(|v| v.abs() < ZERO_TOLERANCE)
    {
        return DVec3::Z;
    }

    let det = 4.0 * a[0] * a[1] - a[2] * a[2];
    let (mut nx, mut ny) = if det.abs() < ZERO_TOLERANCE {
        (0.0, 0.0)
    } else if a[2].abs() < ZERO_TOLERANCE {
        (a[3] / (2.0 * a[0]), a[4] / (2.0 * a[1]))
    } else {
        (
            (a[2] * a[4] - 2.0 * a[1] * a[3]) / det,
            (a[2] * a[3] - 2.0 * a[0] * a[4]) / det,
        )
    };

    let s = nx * nx + ny * ny;
    let nz = if s > 1.0 {
        let len = s.sqrt();
        nx /= len;
        ny /= len;
        0.0
    } else {
        (1.0 - s).sqrt()
    };

    DVec3::new(nx, ny, nz)
}

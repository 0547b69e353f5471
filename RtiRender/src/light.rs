//! Light model
//!
//! Converts a 2D light-pad position into a direction on the upper hemisphere.
//! The pad is a disk of `radius`; positions outside it are pulled back onto the
//! rim, and the rim maps to `kr` rather than 1 so the light never reaches
//! grazing incidence.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Default pad radius, in pad units.
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Default inward bias applied at the pad rim.
pub const DEFAULT_KR: f64 = 0.9;

/// A light-pad geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightPad {
    /// Radius of the pad disk.
    pub radius: f64,
    /// Fraction of the hemisphere reachable at the rim.
    pub kr: f64,
}

impl Default for LightPad {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            kr: DEFAULT_KR,
        }
    }
}

impl LightPad {
    /// Create a pad with a custom radius and rim bias.
    #[must_use]
    pub fn new(radius: f64, kr: f64) -> Self {
        Self { radius, kr }
    }

    /// Map a pad position to a light direction.
    #[must_use]
    pub fn direction(&self, lx: f64, ly: f64) -> LightDirection {
        let (mut lx, mut ly) = (lx, ly);
        let sq = lx * lx + ly * ly;
        let sr = self.radius * self.radius;
        if sq > sr {
            let scale = (sr / sq).sqrt();
            lx *= scale;
            ly *= scale;
        }

        let x = self.kr * (lx / self.radius);
        let y = self.kr * (ly / self.radius);
        let z = (1.0 - x * x - y * y).max(0.0).sqrt();

        tracing::debug!("Light pad ({lx:.3}, {ly:.3}) -> direction ({x:.4}, {y:.4}, {z:.4})");
        LightDirection(DVec3::new(x, y, z))
    }
}

/// A light direction on the upper hemisphere (`z >= 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightDirection(DVec3);

impl LightDirection {
    /// Light straight above the surface.
    #[must_use]
    pub fn overhead() -> Self {
        Self(DVec3::Z)
    }

    /// Build a direction from explicit components.
    ///
    /// The vector is scaled to unit length and `z` is folded into the upper
    /// hemisphere. A zero vector becomes [`LightDirection::overhead`].
    #[must_use]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        let v = DVec3::new(x, y, z.abs()).normalize_or_zero();
        if v == DVec3::ZERO {
            Self::overhead()
        } else {
            Self(v)
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[must_use]
    pub fn as_vec3(&self) -> DVec3 {
        self.0
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_overhead() {
        let dir = LightPad::default().direction(0.0, 0.0);
        assert_eq!(dir, LightDirection::overhead());
    }

    #[test]
    fn test_inside_pad() {
        let dir = LightPad::default().direction(50.0, 0.0);
        assert!((dir.x() - 0.45).abs() < 1e-12);
        assert_eq!(dir.y(), 0.0);
        assert!((dir.z() - (1.0f64 - 0.45 * 0.45).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_outside_pad_is_clamped_to_rim() {
        let pad = LightPad::default();
        for &(lx, ly) in &[(300.0, 0.0), (-150.0, 150.0), (80.0, -90.0), (0.0, 1e6)] {
            let dir = pad.direction(lx, ly);
            let planar = dir.x() * dir.x() + dir.y() * dir.y();
            assert!(planar <= pad.kr * pad.kr + 1e-12, "({lx}, {ly}) escaped the rim");
            assert!((dir.z() - (1.0 - planar).max(0.0).sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rim_direction_is_unit() {
        let dir = LightPad::default().direction(0.0, -400.0);
        assert!((dir.y() + 0.9).abs() < 1e-12);
        assert!((dir.as_vec3().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_xyz() {
        let dir = LightDirection::from_xyz(0.0, 0.0, -2.0);
        assert_eq!(dir, LightDirection::overhead());
        assert_eq!(LightDirection::from_xyz(0.0, 0.0, 0.0), LightDirection::overhead());
    }
}

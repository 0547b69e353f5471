//! Length-checked vector arithmetic on `f64` slices
//!
//! `normalize` divides by the sum of squares rather than the magnitude. The
//! PTM specular term is tuned to that behaviour, so it must not be replaced
//! with a unit-length normalization.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

/// Elementwise `a + b`.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Elementwise `a - b`.
pub fn subtract(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Divide every component by `d`.
pub fn divide(vector: &[f64], d: f64) -> Result<Vec<f64>> {
    if d == 0.0 {
        return Err(Error::ZeroDivisor);
    }
    Ok(vector.iter().map(|x| x / d).collect())
}

/// Sum of elementwise products.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Divide every component by the sum of squares of the vector.
pub fn normalize(vector: &[f64]) -> Result<Vec<f64>> {
    let sum: f64 = vector.iter().map(|x| x * x).sum();
    divide(vector, sum)
}

/// Clamp `value` into `[low, high]`.
#[must_use]
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    low.max(high.min(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_subtract() {
        assert_eq!(add(&[1.0, 2.0, 3.0], &[0.5, 0.5, 0.5]).unwrap(), vec![1.5, 2.5, 3.5]);
        assert_eq!(subtract(&[1.0, 2.0], &[3.0, 1.0]).unwrap(), vec![-2.0, 1.0]);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            add(&[1.0], &[1.0, 2.0]),
            Err(Error::LengthMismatch { left: 1, right: 2 })
        ));
        assert!(subtract(&[1.0, 2.0, 3.0], &[1.0]).is_err());
        assert!(dot(&[], &[1.0]).is_err());
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
    }

    #[test]
    fn test_normalize_divides_by_sum_of_squares() {
        // |v|^2 = 4, so the result is v / 4, not v / 2
        assert_eq!(normalize(&[0.0, 2.0, 0.0]).unwrap(), vec![0.0, 0.5, 0.0]);
        assert_eq!(normalize(&[1.0, 1.0]).unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_zero_divisor() {
        assert!(matches!(divide(&[1.0], 0.0), Err(Error::ZeroDivisor)));
        assert!(matches!(normalize(&[0.0, 0.0, 0.0]), Err(Error::ZeroDivisor)));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp(300.0, 0.0, 255.0), 255.0);
    }
}

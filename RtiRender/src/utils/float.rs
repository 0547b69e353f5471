//! IEEE-754 binary32 decoding
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use byteorder::{ByteOrder, LittleEndian};

const SIGN_MASK: u32 = 0x80000000;
const EXPONENT_MASK: u32 = 0xFF;
const SIGNIFICAND_MASK: u32 = 0x007FFFFF;
const EXPONENT_BIAS: i32 = 127;

/// Decode four little-endian bytes as an IEEE-754 single-precision float.
///
/// The sign, 8-bit exponent and 23-bit significand are taken apart explicitly.
/// An all-ones exponent yields infinity or NaN, an all-zeros exponent a
/// signed zero or subnormal.
#[must_use]
pub fn decode_ieee754_le(bytes: [u8; 4]) -> f64 {
    let bits = LittleEndian::read_u32(&bytes);

    let sign = if bits & SIGN_MASK == 0 { 1.0 } else { -1.0 };
    let exponent = ((bits >> 23) & EXPONENT_MASK) as i32 - EXPONENT_BIAS;
    let significand = bits & SIGNIFICAND_MASK;

    if exponent == 128 {
        return if significand == 0 {
            sign * f64::INFINITY
        } else {
            f64::NAN
        };
    }

    let (exponent, mantissa) = if exponent == -EXPONENT_BIAS {
        if significand == 0 {
            return sign * 0.0;
        }
        // Subnormal: no implicit leading one
        (-126, f64::from(significand) / f64::from(1u32 << 23))
    } else {
        (
            exponent,
            f64::from(significand | (1 << 23)) / f64::from(1u32 << 23),
        )
    };

    sign * mantissa * 2f64.powi(exponent)
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// PTM coefficient quantization and pixel output both round this way, so
/// `-2.5` becomes `-2` rather than `-3` as with [`f64::round`].
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

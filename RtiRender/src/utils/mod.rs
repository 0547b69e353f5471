//! Utility functions
//!
//! Small numeric helpers shared by the decoders and renderers.

pub mod float;
pub mod vector;

pub use float::{decode_ieee754_le, round_half_up};
pub use vector::{add, clamp, divide, dot, normalize, subtract};

//! File-level conversions
//!
//! - `rti_png` - render PTM/HSH files to PNG

pub mod rti_png;

pub use rti_png::{convert_to_png, decode_file, render_bytes_to_png, render_image_to_png};

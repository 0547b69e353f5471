//! HSH (Hemispherical Harmonics RTI) decoding
//!
//! Layout of a `.rti`/`.hsh` file:
//!
//! ```text
//! # optional comment lines
//! <type>
//! <width> <height> <dimension>
//! <terms> <basis type> <element size>
//! <terms x f32 LE scale><terms x f32 LE bias>
//! <width * height * dimension * terms bytes>
//! ```
//!
//! Each payload byte is dequantized as `byte / 255 * scale[term] + bias[term]`.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use crate::formats::common::{
    CoefficientImage, HeaderCursor, checked_len, parse_token, parse_tokens,
};
use crate::utils::decode_ieee754_le;

/// Number of basis functions the renderer can evaluate.
pub const MAX_TERMS: usize = 16;

/// RTI type tag used by hemispherical harmonics files.
pub const HSH_RTI_TYPE: i32 = 3;

/// Basis type tag for the hemispherical harmonics basis.
pub const HSH_BASIS_TYPE: i32 = 2;

/// Parsed HSH header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HshHeader {
    pub rti_type: i32,
    pub width: usize,
    pub height: usize,
    /// Colour channels per pixel.
    pub dimension: usize,
    /// Basis terms per channel.
    pub terms: usize,
    pub basis_type: i32,
    /// Bytes per stored coefficient.
    pub element_size: i32,
}

/// A decoded HSH image.
#[derive(Debug, Clone, PartialEq)]
pub struct HshImage {
    pub header: HshHeader,
    /// Per-term dequantization scale.
    pub scale: Vec<f64>,
    /// Per-term dequantization bias.
    pub bias: Vec<f64>,
    pub coefficients: CoefficientImage,
}

/// Read only the text header of an HSH file.
pub fn read_header(data: &[u8]) -> Result<HshHeader> {
    parse_header(&mut HeaderCursor::new(data))
}

/// Decode an HSH file into a coefficient image.
pub fn decode(data: &[u8]) -> Result<HshImage> {
    let mut cursor = HeaderCursor::new(data);
    let header = parse_header(&mut cursor)?;
    let expected = checked_len(header.width, header.height, header.dimension, header.terms)?;

    let scale = read_float_table(&mut cursor, header.terms, "scale table")?;
    let bias = read_float_table(&mut cursor, header.terms, "bias table")?;

    let payload = cursor.take(expected, "coefficients")?;
    if cursor.remaining() > 0 {
        tracing::debug!("Ignoring {} trailing bytes after HSH payload", cursor.remaining());
    }

    // Term is the innermost index, so it cycles with the flat position
    let values = payload
        .iter()
        .enumerate()
        .map(|(i, &byte)| {
            let term = i % header.terms;
            f64::from(byte) / 255.0 * scale[term] + bias[term]
        })
        .collect();

    let coefficients = CoefficientImage::from_data(
        header.width,
        header.height,
        header.dimension,
        header.terms,
        values,
    )?;

    tracing::debug!(
        "Decoded HSH {}x{} ({} channels, {} terms)",
        header.width,
        header.height,
        header.dimension,
        header.terms
    );

    Ok(HshImage {
        header,
        scale,
        bias,
        coefficients,
    })
}

fn parse_header(cursor: &mut HeaderCursor<'_>) -> Result<HshHeader> {
    cursor.skip_comments();

    let rti_type: i32 = parse_token(cursor.read_line("type")?, "type")?;

    let [width, height, dimension]: [i64; 3] =
        parse_tokens(&cursor.read_tokens("size")?, "size")?;
    let [terms, basis_type, element_size]: [i64; 3] =
        parse_tokens(&cursor.read_tokens("basis")?, "basis")?;

    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let dimension = usize::try_from(dimension).unwrap_or(0);
    if !(1..=3).contains(&dimension) {
        return Err(Error::UnsupportedDimension(dimension));
    }
    let terms = usize::try_from(terms).unwrap_or(0);
    if !(1..=MAX_TERMS).contains(&terms) {
        return Err(Error::UnsupportedTermCount(terms));
    }
    let basis_type = i32::try_from(basis_type)
        .map_err(|_| Error::header("basis", "basis type out of range"))?;
    let element_size = i32::try_from(element_size)
        .map_err(|_| Error::header("basis", "element size out of range"))?;

    if rti_type != HSH_RTI_TYPE {
        tracing::warn!("Unexpected RTI type {rti_type}, decoding as HSH");
    }
    if basis_type != HSH_BASIS_TYPE {
        tracing::warn!("Unexpected basis type {basis_type}, decoding as HSH");
    }
    if element_size != 1 {
        tracing::warn!("Element size {element_size} given, payload is read as single bytes");
    }

    let header = HshHeader {
        rti_type,
        width: usize::try_from(width).map_err(|_| Error::InvalidDimensions { width, height })?,
        height: usize::try_from(height).map_err(|_| Error::InvalidDimensions { width, height })?,
        dimension,
        terms,
        basis_type,
        element_size,
    };
    tracing::debug!("HSH header: {header:?}");
    Ok(header)
}

fn read_float_table(
    cursor: &mut HeaderCursor<'_>,
    count: usize,
    section: &'static str,
) -> Result<Vec<f64>> {
    let bytes = cursor.take(count * 4, section)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| decode_ieee754_le([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

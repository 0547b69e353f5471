//! `.ptm` header parsing and payload decoding

use glam::DVec3;

use crate::error::{Error, Result};
use crate::formats::common::{CoefficientImage, HeaderCursor, checked_len, parse_token};
use crate::utils::round_half_up;

use super::{
    DEFAULT_BASE_COLOR, NormalMap, PTM_COEFFICIENTS, PTM_FORMAT_LRGB, PTM_TERMS, PtmHeader,
    PtmImage, PtmVersion, RGB_OFFSET, calculate_normal,
};

/// Read only the text header of a PTM file.
pub fn read_header(data: &[u8]) -> Result<PtmHeader> {
    parse_header(&mut HeaderCursor::new(data))
}

/// Decode a PTM file into coefficients and a normal map.
///
/// Rows are stored bottom-up in the file; the decoded image is top-down.
pub fn decode(data: &[u8]) -> Result<PtmImage> {
    let mut cursor = HeaderCursor::new(data);
    let header = parse_header(&mut cursor)?;
    let (width, height) = (header.width, header.height);

    // 1.1 interleaves RGB after each pixel's coefficients
    let stride = match header.version {
        PtmVersion::V1_1 => PTM_COEFFICIENTS + 3,
        PtmVersion::V1_0 | PtmVersion::V1_2 => PTM_COEFFICIENTS,
    };

    // The payload must be present before anything is sized from the header
    let payload = cursor.take(checked_len(width, height, 1, stride)?, "coefficients")?;
    let colors = match header.version {
        PtmVersion::V1_2 => Some(cursor.take(checked_len(width, height, 1, 3)?, "colour block")?),
        PtmVersion::V1_0 | PtmVersion::V1_1 => None,
    };
    if cursor.remaining() > 0 {
        tracing::debug!("Ignoring {} trailing bytes after PTM payload", cursor.remaining());
    }

    let mut coefficients = CoefficientImage::new(width, height, 1, PTM_TERMS)?;
    let mut normals = vec![DVec3::Z; width * height];

    for ((x, y), chunk) in file_order(width, height).zip(payload.chunks_exact(stride)) {
        let pixel = coefficients.pixel_mut(x, y);

        let mut a = [0.0; PTM_COEFFICIENTS];
        for (d, coefficient) in a.iter_mut().enumerate() {
            *coefficient = round_half_up((f64::from(chunk[d]) - header.bias[d]) * header.scale[d]);
        }
        pixel[..PTM_COEFFICIENTS].copy_from_slice(&a);

        match header.version {
            PtmVersion::V1_1 => write_rgb(pixel, &chunk[PTM_COEFFICIENTS..]),
            PtmVersion::V1_0 => write_rgb(pixel, &DEFAULT_BASE_COLOR),
            PtmVersion::V1_2 => {}
        }

        normals[y * width + x] = calculate_normal(&a);
    }

    if let Some(colors) = colors {
        for ((x, y), chunk) in file_order(width, height).zip(colors.chunks_exact(3)) {
            write_rgb(coefficients.pixel_mut(x, y), chunk);
        }
    }

    tracing::debug!("Decoded {} {}x{}", header.version, width, height);

    Ok(PtmImage {
        normals: NormalMap::from_vec(width, height, normals)?,
        coefficients,
        header,
    })
}

/// Pixel coordinates in file order: bottom row first, left to right.
fn file_order(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height).rev().flat_map(move |y| (0..width).map(move |x| (x, y)))
}

fn write_rgb(pixel: &mut [f64], rgb: &[u8]) {
    for (slot, &byte) in pixel[RGB_OFFSET..].iter_mut().zip(rgb) {
        *slot = f64::from(byte);
    }
}

fn parse_header(cursor: &mut HeaderCursor<'_>) -> Result<PtmHeader> {
    let version = PtmVersion::parse(cursor.read_line("version")?)?;

    let format = cursor.read_line("format")?;
    if format != PTM_FORMAT_LRGB {
        return Err(Error::UnsupportedPtmFormat(format.to_string()));
    }

    let width: i64 = parse_token(cursor.read_line("width")?, "width")?;
    let height: i64 = parse_token(cursor.read_line("height")?, "height")?;
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let tokens = cursor.read_tokens("scale")?;
    let (scale_tokens, bias_tokens) = match tokens.len() {
        12 => (tokens[..6].to_vec(), tokens[6..].to_vec()),
        6 => {
            let bias = cursor.read_tokens("bias")?;
            if bias.len() != PTM_COEFFICIENTS {
                return Err(Error::InvalidScaleBiasCount(bias.len()));
            }
            (tokens, bias)
        }
        n => return Err(Error::InvalidScaleBiasCount(n)),
    };

    let mut scale = [0.0; PTM_COEFFICIENTS];
    let mut bias = [0.0; PTM_COEFFICIENTS];
    for (value, token) in scale.iter_mut().zip(&scale_tokens) {
        *value = parse_token(token, "scale")?;
    }
    for (value, token) in bias.iter_mut().zip(&bias_tokens) {
        *value = parse_bias(token)?;
    }

    let header = PtmHeader {
        version,
        format: format.to_string(),
        width: usize::try_from(width).map_err(|_| Error::InvalidDimensions { width, height })?,
        height: usize::try_from(height).map_err(|_| Error::InvalidDimensions { width, height })?,
        scale,
        bias,
    };
    tracing::debug!("PTM header: {header:?}");
    Ok(header)
}

/// Bias values are integers; anything after the leading digits is dropped.
fn parse_bias(token: &str) -> Result<f64> {
    let end = token
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && matches!(c, '-' | '+'))))
        .map_or(token.len(), |(i, _)| i);
    let value: i64 = parse_token(&token[..end], "bias")?;
    Ok(value as f64)
}

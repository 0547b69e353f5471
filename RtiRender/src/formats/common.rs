//! Shared decoding types: the coefficient image and the header reader
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::str::FromStr;

use crate::error::{Error, Result};

/// A per-pixel coefficient image.
///
/// Values are stored flat, indexed as
/// `((y * width + x) * dimension + channel) * terms + term`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientImage {
    width: usize,
    height: usize,
    dimension: usize,
    terms: usize,
    data: Vec<f64>,
}

impl CoefficientImage {
    /// Allocate a zero-filled image.
    pub fn new(width: usize, height: usize, dimension: usize, terms: usize) -> Result<Self> {
        let len = checked_len(width, height, dimension, terms)?;
        Ok(Self {
            width,
            height,
            dimension,
            terms,
            data: vec![0.0; len],
        })
    }

    /// Wrap an existing buffer, checking its length against the layout.
    pub fn from_data(
        width: usize,
        height: usize,
        dimension: usize,
        terms: usize,
        data: Vec<f64>,
    ) -> Result<Self> {
        let len = checked_len(width, height, dimension, terms)?;
        if data.len() != len {
            return Err(Error::LengthMismatch {
                left: data.len(),
                right: len,
            });
        }
        Ok(Self {
            width,
            height,
            dimension,
            terms,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of colour channels per pixel.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of coefficients per channel.
    #[must_use]
    pub fn terms(&self) -> usize {
        self.terms
    }

    /// Number of stored values per pixel (`dimension * terms`).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.dimension * self.terms
    }

    /// Flat index of one coefficient.
    #[must_use]
    pub fn index(&self, x: usize, y: usize, channel: usize, term: usize) -> usize {
        ((y * self.width + x) * self.dimension + channel) * self.terms + term
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize, channel: usize, term: usize) -> f64 {
        self.data[self.index(x, y, channel, term)]
    }

    pub fn set(&mut self, x: usize, y: usize, channel: usize, term: usize, value: f64) {
        let idx = self.index(x, y, channel, term);
        self.data[idx] = value;
    }

    /// All values of one pixel, channel-major.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> &[f64] {
        let start = (y * self.width + x) * self.depth();
        &self.data[start..start + self.depth()]
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [f64] {
        let depth = self.depth();
        let start = (y * self.width + x) * depth;
        &mut self.data[start..start + depth]
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }
}

/// Validate image dimensions and return the flat buffer length.
pub(crate) fn checked_len(
    width: usize,
    height: usize,
    dimension: usize,
    terms: usize,
) -> Result<usize> {
    let invalid = || Error::InvalidDimensions {
        width: i64::try_from(width).unwrap_or(i64::MAX),
        height: i64::try_from(height).unwrap_or(i64::MAX),
    };
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(dimension))
        .and_then(|n| n.checked_mul(terms))
        .ok_or_else(invalid)
}

// ============================================================================
// Header reading
// ============================================================================

/// Reads the text header that precedes the binary payload of PTM and HSH files.
///
/// Lines are `\n` terminated; surrounding whitespace (including `\r`) is
/// trimmed. After the header, [`HeaderCursor::take`] hands out raw bytes.
pub(crate) struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Skip leading lines that start with `#`.
    pub(crate) fn skip_comments(&mut self) {
        while self.data.get(self.pos) == Some(&b'#') {
            self.pos = match self.data[self.pos..].iter().position(|&b| b == b'\n') {
                Some(offset) => self.pos + offset + 1,
                None => self.data.len(),
            };
        }
    }

    /// Read one trimmed header line.
    pub(crate) fn read_line(&mut self, field: &'static str) -> Result<&'a str> {
        let rest = &self.data[self.pos..];
        let end = rest
            .iter()
            .position(|&b| b == b'\n')
            .ok_or_else(|| Error::header(field, "unexpected end of header"))?;
        self.pos += end + 1;
        std::str::from_utf8(&rest[..end])
            .map(str::trim)
            .map_err(|_| Error::header(field, "header line is not valid text"))
    }

    /// Read one line and split it on whitespace.
    pub(crate) fn read_tokens(&mut self, field: &'static str) -> Result<Vec<&'a str>> {
        Ok(self.read_line(field)?.split_whitespace().collect())
    }

    /// Take `len` raw bytes.
    pub(crate) fn take(&mut self, len: usize, section: &'static str) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::TruncatedInput {
                section,
                expected: len,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}

/// Parse a single header token.
pub(crate) fn parse_token<T: FromStr>(token: &str, field: &'static str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::header(field, format!("cannot parse {token:?}")))
}

/// Parse a line that must hold exactly `N` tokens.
pub(crate) fn parse_tokens<T: FromStr + Copy + Default, const N: usize>(
    tokens: &[&str],
    field: &'static str,
) -> Result<[T; N]> {
    if tokens.len() != N {
        return Err(Error::header(
            field,
            format!("expected {N} values, found {}", tokens.len()),
        ));
    }
    let mut values = [T::default(); N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = parse_token(token, field)?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_layout() {
        let mut image = CoefficientImage::new(3, 2, 3, 4).unwrap();
        assert_eq!(image.data().len(), 3 * 2 * 3 * 4);
        assert_eq!(image.index(0, 0, 0, 0), 0);
        assert_eq!(image.index(0, 0, 1, 0), 4);
        assert_eq!(image.index(1, 0, 0, 0), 12);
        assert_eq!(image.index(0, 1, 0, 0), 36);

        image.set(2, 1, 2, 3, 7.5);
        assert_eq!(image.get(2, 1, 2, 3), 7.5);
        assert_eq!(image.pixel(2, 1)[2 * 4 + 3], 7.5);
        assert_eq!(*image.data().last().unwrap(), 7.5);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            CoefficientImage::new(0, 4, 3, 9),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(CoefficientImage::new(4, 0, 3, 9).is_err());
    }

    #[test]
    fn test_from_data_length_checked() {
        assert!(CoefficientImage::from_data(1, 1, 1, 2, vec![1.0]).is_err());
        assert!(CoefficientImage::from_data(1, 1, 1, 2, vec![1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_cursor_lines_and_comments() {
        let data = b"# first\n#second\n3\r\n 10 20 3 \nrest";
        let mut cursor = HeaderCursor::new(data);
        cursor.skip_comments();
        assert_eq!(cursor.read_line("type").unwrap(), "3");
        assert_eq!(cursor.read_tokens("size").unwrap(), vec!["10", "20", "3"]);
        assert_eq!(cursor.remaining(), 4);
        assert!(cursor.read_line("missing").is_err());
        assert_eq!(cursor.take(4, "payload").unwrap(), b"rest");
    }

    #[test]
    fn test_cursor_truncation() {
        let mut cursor = HeaderCursor::new(b"ab");
        let err = cursor.take(3, "payload").unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput { section: "payload", expected: 3, available: 2 }
        ));
    }

    #[test]
    fn test_parse_tokens() {
        let values: [usize; 3] = parse_tokens(&["9", "2", "1"], "terms").unwrap();
        assert_eq!(values, [9, 2, 1]);
        assert!(parse_tokens::<usize, 3>(&["9", "2"], "terms").is_err());
        assert!(parse_tokens::<usize, 2>(&["9", "x"], "terms").is_err());
    }
}

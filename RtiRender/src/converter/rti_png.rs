//! PTM/HSH → PNG rendering
//!
//! Reads a reflectance file, picks the decoder from its extension, optionally
//! fits it into the viewer size, relights it and writes the result as PNG.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::formats::{DecodedImage, RtiFormat};
use crate::render::render;

/// Read and decode a PTM or HSH file.
///
/// The format is chosen from the file extension.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedImage> {
    let format = RtiFormat::from_path(path.as_ref())?;

    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    tracing::debug!("Read {} bytes of {} data", data.len(), format.name());
    DecodedImage::decode(&data, format)
}

/// Render an already decoded image to PNG bytes.
///
/// `(lx, ly)` is a light-pad position, mapped through `config.light`.
pub fn render_image_to_png(
    image: &DecodedImage,
    config: &RenderConfig,
    lx: f64,
    ly: f64,
) -> Result<Vec<u8>> {
    let fitted;
    let image = if config.viewer.auto_scale {
        fitted = image.fit_within(config.viewer.width, config.viewer.height)?;
        &fitted
    } else {
        image
    };

    let light = config.light.direction(lx, ly);
    render(image, &light, &config.shading)?.to_png_bytes()
}

/// Decode raw file bytes and render them to PNG bytes.
pub fn render_bytes_to_png(
    data: &[u8],
    format: RtiFormat,
    config: &RenderConfig,
    lx: f64,
    ly: f64,
) -> Result<Vec<u8>> {
    let image = DecodedImage::decode(data, format)?;
    render_image_to_png(&image, config, lx, ly)
}

/// Render a PTM or HSH file to a PNG file.
pub fn convert_to_png<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &RenderConfig,
    lx: f64,
    ly: f64,
) -> Result<()> {
    tracing::info!(
        "Rendering {:?} → {:?} (light {lx}, {ly})",
        input.as_ref(),
        output.as_ref()
    );

    let image = decode_file(input)?;
    let png_data = render_image_to_png(&image, config, lx, ly)?;

    let mut writer = BufWriter::new(File::create(output.as_ref())?);
    writer.write_all(&png_data)?;
    writer.flush()?;

    tracing::info!("Rendering complete");
    Ok(())
}

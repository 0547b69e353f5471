//! CLI command for rendering PTM/HSH files to PNG

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{BULB, DISK, LOOKING_GLASS, print_done, print_step, simple_spinner};
use crate::config::RenderConfig;
use crate::converter::{decode_file, render_image_to_png};

/// Arguments of the `render` command.
pub struct RenderArgs<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub lx: f64,
    pub ly: f64,
    pub diffuse: bool,
    pub specular: bool,
    pub no_auto_scale: bool,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub config: Option<&'a Path>,
    pub quiet: bool,
}

/// Build the effective configuration: file values, then flag overrides.
fn resolve_config(args: &RenderArgs<'_>) -> anyhow::Result<RenderConfig> {
    let mut config = match args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    config.shading.diffuse |= args.diffuse;
    config.shading.specular |= args.specular;
    if args.no_auto_scale {
        config.viewer.auto_scale = false;
    }
    if let Some(width) = args.width {
        config.viewer.width = width;
    }
    if let Some(height) = args.height {
        config.viewer.height = height;
    }

    Ok(config)
}

/// Render a file to PNG
pub fn execute(args: &RenderArgs<'_>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = resolve_config(args)?;

    if !args.quiet {
        print_step(1, 3, &LOOKING_GLASS, &format!("Decoding {}...", args.input.display()));
    }
    let image = decode_file(args.input)?;

    let png_data = if args.quiet {
        render_image_to_png(&image, &config, args.lx, args.ly)?
    } else {
        print_step(2, 3, &BULB, &format!("Relighting at ({}, {})...", args.lx, args.ly));
        let pb = simple_spinner(&format!("{}x{} pixels", image.width(), image.height()));
        let result = render_image_to_png(&image, &config, args.lx, args.ly);
        pb.finish_and_clear();
        result?
    };

    if !args.quiet {
        print_step(3, 3, &DISK, &format!("Writing {}...", args.output.display()));
    }
    std::fs::write(args.output, png_data)?;

    if !args.quiet {
        print_done(start.elapsed());
    }
    Ok(())
}

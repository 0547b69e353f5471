//! Command execution implementations

use super::Commands;
use super::{info, render};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Render {
                input,
                output,
                lx,
                ly,
                diffuse,
                specular,
                no_auto_scale,
                width,
                height,
                config,
                quiet,
            } => render::execute(&render::RenderArgs {
                input,
                output,
                lx: *lx,
                ly: *ly,
                diffuse: *diffuse,
                specular: *specular,
                no_auto_scale: *no_auto_scale,
                width: *width,
                height: *height,
                config: config.as_deref(),
                quiet: *quiet,
            }),
            Commands::Info { path } => info::execute(path),
        }
    }
}

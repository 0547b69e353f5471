use clap::Subcommand;
use std::path::PathBuf;

mod execute;
pub mod info;
pub mod render;

#[derive(Subcommand)]
pub enum Commands {
    /// Render a PTM or HSH file to PNG under a given light position
    Render {
        /// Input RTI (.rti/.hsh) or PTM (.ptm) file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG image
        #[arg(short, long)]
        output: PathBuf,

        /// X coordinate of the light position on the light pad
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lx: f64,

        /// Y coordinate of the light position on the light pad
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        ly: f64,

        /// Apply diffuse shading (PTM only)
        #[arg(long)]
        diffuse: bool,

        /// Apply specular highlights (PTM only)
        #[arg(long)]
        specular: bool,

        /// Render at the decoded size instead of fitting the viewer
        #[arg(long)]
        no_auto_scale: bool,

        /// Viewer width to fit into
        #[arg(long)]
        width: Option<usize>,

        /// Viewer height to fit into
        #[arg(long)]
        height: Option<usize>,

        /// TOML render configuration; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show header information of a PTM or HSH file
    Info {
        /// Input RTI (.rti/.hsh) or PTM (.ptm) file
        path: PathBuf,
    },
}

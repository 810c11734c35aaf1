mod app;
mod effects;
mod logging;

use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

/// Submit an image and a text prompt to the video generation service and
/// wait for the result.
#[derive(Parser, Debug)]
#[command(name = "vidgen")]
pub struct Cli {
    /// Base URL of the generation service.
    #[arg(long, default_value = "http://localhost:3001")]
    pub server: String,

    /// Path to a local image file to upload.
    #[arg(long, conflicts_with = "image_id")]
    pub image: Option<PathBuf>,

    /// Identifier of a cataloged image asset.
    #[arg(long)]
    pub image_id: Option<String>,

    /// Free-form prompt text.
    #[arg(long, conflicts_with = "template")]
    pub text: Option<String>,

    /// Zero-based index of a catalog text template.
    #[arg(long)]
    pub template: Option<usize>,

    /// Request timeout override in seconds. Defaults to 20 minutes.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

fn main() -> anyhow::Result<()> {
    app::run(Cli::parse())
}

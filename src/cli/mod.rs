// Command-line interface for inspecting resolved asset URLs

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slider-assets")]
#[command(about = "Resolve slider image URLs against the configured base URL", long_about = None)]
pub struct Cli {
    /// Base URL to resolve relative paths against (overrides BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Read settings from this dotenv file
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve image paths, one URL per line
    Resolve {
        /// Image paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the slider image URLs
    Slider {
        /// Print the whole catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

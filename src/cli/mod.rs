use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::ExportFormat;
use crate::model::{Desktop, NvidiaDriver, Stability};

#[derive(Parser)]
#[command(name = "atomic-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List image references, optionally filtered
    List {
        /// Only list images from this category
        #[arg(long)]
        category: Option<String>,

        /// Desktop environment or compositor (e.g., kde, gnome, sway)
        #[arg(long)]
        desktop: Option<Desktop>,

        /// NVIDIA driver variant (none, open, proprietary)
        #[arg(long)]
        nvidia: Option<NvidiaDriver>,

        /// Effective stability tier (stable, beta, experimental)
        #[arg(long)]
        stability: Option<Stability>,

        /// Print name, desktop, driver and url for each image
        #[arg(short, long)]
        long: bool,
    },

    /// Show a category and its images
    Show {
        /// Category name (case-insensitive)
        category: String,
    },

    /// Export the catalog as JSON or TOML
    Export {
        /// Output format
        #[arg(long, env = "ATOMIC_CATALOG_FORMAT")]
        format: Option<ExportFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Check the catalog for naming collisions and malformed records
    Validate,

    /// Show version information
    Version,
}

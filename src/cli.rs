use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::ConfigOverrides;
use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "boltzmann-highlights")]
#[command(about = "Rank and highlight complex regions from Boltzmann analyser output", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the non-overlapping highlight set for one file
    Highlight {
        /// Analysis file (.blta) or source file to highlight
        target: PathBuf,

        /// Workspace root containing the .boltzmann directory
        #[arg(long)]
        root: Option<PathBuf>,

        /// Reweight complexity with the project graph
        #[arg(long, conflicts_with = "no_attenuation")]
        attenuation: bool,

        /// Ignore the project graph even if enabled in config
        #[arg(long)]
        no_attenuation: bool,

        /// Minimum normalized complexity to highlight (0.0-1.0)
        #[arg(long, env = "BOLTZMANN_COMPLEXITY_THRESHOLD")]
        threshold: Option<f64>,

        /// Alpha of highlight colours (0.0-1.0)
        #[arg(long, env = "BOLTZMANN_HIGHLIGHT_ALPHA")]
        alpha: Option<f64>,

        /// Minimum attenuated complexity before normalization
        #[arg(long = "min-complexity-per-loc")]
        min_complexity_per_loc: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: FormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a file's total complexity
    Summary {
        /// Analysis file (.blta) or source file
        target: PathBuf,

        /// Workspace root containing the .boltzmann directory
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Write a default .boltzmann.toml
    Init {
        /// Directory to write the configuration into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Terminal,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Terminal => OutputFormat::Terminal,
        }
    }
}

/// `--attenuation` / `--no-attenuation` to an optional override.
pub fn attenuation_override(attenuation: bool, no_attenuation: bool) -> Option<bool> {
    match (attenuation, no_attenuation) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

pub fn config_overrides(
    attenuation: bool,
    no_attenuation: bool,
    threshold: Option<f64>,
    alpha: Option<f64>,
    min_complexity_per_loc: Option<f64>,
) -> ConfigOverrides {
    ConfigOverrides {
        attenuation: attenuation_override(attenuation, no_attenuation),
        complexity_threshold: threshold,
        highlight_alpha: alpha,
        min_complexity_per_loc,
    }
}

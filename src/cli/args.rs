//! Command line argument parsing for the Glossa CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Glossa - statistical language identification
#[derive(Parser, Debug, Clone)]
#[command(name = "glossa")]
#[command(about = "A statistical language identification tool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlossaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlossaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a model from a configuration directory and save a snapshot
    Train(TrainArgs),

    /// Identify the language of a text sample
    Detect(DetectArgs),

    /// Show model statistics
    Stats(StatsArgs),
}

/// Arguments for training a model
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the configuration directory
    #[arg(short, long, value_name = "CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Where to write the model snapshot
    #[arg(short, long, value_name = "SNAPSHOT_FILE")]
    pub snapshot: PathBuf,
}

/// Arguments for language detection
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// Text sample to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Load the model from a snapshot file
    #[arg(short, long, value_name = "SNAPSHOT_FILE")]
    pub snapshot: Option<PathBuf>,

    /// Build the model fresh from a configuration directory
    #[arg(short, long, value_name = "CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Arguments for showing model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Load the model from a snapshot file
    #[arg(short, long, value_name = "SNAPSHOT_FILE")]
    pub snapshot: Option<PathBuf>,

    /// Build the model fresh from a configuration directory
    #[arg(short, long, value_name = "CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

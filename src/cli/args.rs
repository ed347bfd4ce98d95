//! Command line argument parsing for the Respell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Respell - a frequency-based spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "respell")]
#[command(about = "A frequency-based spelling corrector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RespellArgs {
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

impl RespellArgs {
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

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct one or more words
    Correct(CorrectArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),

    /// Evaluate the corrector against labeled typo fixtures
    Evaluate(EvaluateArgs),
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Path to the training corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Show the top N ranked suggestions instead of a single correction
    #[arg(short, long, value_name = "N")]
    pub suggestions: Option<usize>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the training corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Number of top words to show
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for fixture evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Path to the training corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Fixture files (JSON, correct word -> space-separated misspellings)
    #[arg(value_name = "FIXTURE", required = true)]
    pub fixtures: Vec<PathBuf>,
}

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Legible - Text readability metrics for the terminal.
#[derive(Debug, Parser)]
#[command(name = "legible")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute one readability scale over a file or stdin
    Score(ScoreArgs),

    /// Compute every scale and render the full report
    Report(ReportArgs),

    /// List registered readability scales
    List(ListArgs),

    /// Re-evaluate a file on every change
    Watch(WatchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `score` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScoreArgs {
    /// Scale id (see `legible list`)
    pub scale: String,

    /// File to analyze (stdin if omitted)
    pub file: Option<PathBuf>,

    /// Restrict to a 1-based inclusive line range, e.g. 10:25
    #[arg(long, value_name = "START:END")]
    pub lines: Option<String>,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// File to analyze (stdin if omitted)
    pub file: Option<PathBuf>,

    /// Restrict to a 1-based inclusive line range, e.g. 10:25
    #[arg(long, value_name = "START:END")]
    pub lines: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct WatchArgs {
    /// File to watch
    pub file: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

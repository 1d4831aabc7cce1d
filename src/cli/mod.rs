//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - run: Run command arguments
//! - plan: Plan command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod plan;
pub mod run;

pub use completions::CompletionsArgs;
pub use plan::PlanArgs;
pub use run::RunArgs;

/// evm-bootstrap - prepare a host for EVM benchmarking
///
/// Installs an Ethereum client and the Solidity compiler through apt.
#[derive(Parser, Debug)]
#[command(
    name = "evm-bootstrap",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install an Ethereum client and the Solidity compiler on Debian-family hosts",
    long_about = "evm-bootstrap prepares a host for running EVM benchmarks. It installs the \
                  repository helper, registers the Ethereum PPA, refreshes the package index and \
                  installs the ethereum and solc packages, always attempting every step in order.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  evm-bootstrap                          \x1b[90m# Run all five steps\x1b[0m\n   \
                  evm-bootstrap run --dry-run            \x1b[90m# Print the commands without running them\x1b[0m\n   \
                  evm-bootstrap plan --json              \x1b[90m# Show the steps as JSON\x1b[0m\n   \
                  evm-bootstrap run --step-timeout 600   \x1b[90m# Give up on any step after ten minutes\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Optional YAML configuration file
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output (package manager output is still shown)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bootstrap steps (default when no command is given)
    Run(RunArgs),

    /// Show the bootstrap steps without running them
    Plan(PlanArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

//! evm-bootstrap - EVM benchmark host preparation
//!
//! Installs the repository helper, registers the Ethereum PPA, refreshes the
//! package index and installs the Ethereum client and the Solidity compiler.
//! Every step is attempted in order no matter how the previous one ended.

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod config;
mod error;
mod package_manager;
mod runner;
mod ui;

use cli::{Cli, Commands, RunArgs};
use commands::OutputOptions;
use error::Result;

fn dispatch(cli: Cli) -> Result<i32> {
    let output = OutputOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        None => commands::run::run(config_path, output, &RunArgs::default()),
        Some(Commands::Run(args)) => commands::run::run(config_path, output, &args),
        Some(Commands::Plan(args)) => commands::plan::run(config_path, &args).map(|()| 0),
        Some(Commands::Version) => commands::version::run().map(|()| 0),
        Some(Commands::Completions(args)) => commands::completions::run(&args).map(|()| 0),
    }
}

fn main() {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

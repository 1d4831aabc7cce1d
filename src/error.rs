//! Error types and handling for evm-bootstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! A failing package-manager step is not an error here: it is recorded as a
//! [`crate::runner::StepStatus`] and the bootstrap moves on. Only problems that
//! stop the tool before or around the steps end up in [`BootstrapError`].

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for evm-bootstrap
#[derive(Error, Diagnostic, Debug)]
pub enum BootstrapError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(evm_bootstrap::config::not_found),
        help("Pass an existing YAML file to --config, or omit the flag to use defaults")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(evm_bootstrap::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(evm_bootstrap::config::parse_failed),
        help("Known keys: escalation, assume_yes, step_timeout_secs")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(evm_bootstrap::config::invalid))]
    ConfigInvalid { message: String },

    // Process errors
    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(
        code(evm_bootstrap::process::spawn_failed),
        help("Check that the program is installed and on PATH")
    )]
    CommandSpawnFailed { program: String, reason: String },

    #[error("Failed to wait for '{program}': {reason}")]
    #[diagnostic(code(evm_bootstrap::process::wait_failed))]
    CommandWaitFailed { program: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(evm_bootstrap::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(evm_bootstrap::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BootstrapError {
    fn from(err: serde_json::Error) -> Self {
        BootstrapError::IoError {
            message: format!("Failed to serialize output: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BootstrapError>;

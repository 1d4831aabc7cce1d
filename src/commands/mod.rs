//! Command implementations for evm-bootstrap CLI

pub mod completions;
pub mod plan;
pub mod run;
pub mod version;

/// Output flags shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub verbose: bool,
    pub quiet: bool,
}

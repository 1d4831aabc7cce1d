//! Package manager abstraction
//!
//! - [`Operation`]: what a step asks the package manager to do
//! - [`PackageManager`]: the seam the bootstrap drives
//! - [`apt`]: the Debian-family implementation

pub mod apt;

use std::fmt;

use serde::Serialize;

use crate::runner::StepStatus;

pub use apt::Apt;

/// One package-manager action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Operation {
    /// Install a named package
    Install { package: String },
    /// Register an additional package repository
    AddRepository { repository: String },
    /// Refresh the package index from all registered repositories
    RefreshIndex,
}

impl Operation {
    pub fn install(package: impl Into<String>) -> Self {
        Operation::Install {
            package: package.into(),
        }
    }

    pub fn add_repository(repository: impl Into<String>) -> Self {
        Operation::AddRepository {
            repository: repository.into(),
        }
    }

    /// Human-readable summary for progress output
    pub fn summary(&self) -> String {
        match self {
            Operation::Install { package } => format!("Installing {package}"),
            Operation::AddRepository { repository } => format!("Registering repository {repository}"),
            Operation::RefreshIndex => "Refreshing package index".to_string(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Install { package } => write!(f, "install {package}"),
            Operation::AddRepository { repository } => write!(f, "add-repo {repository}"),
            Operation::RefreshIndex => write!(f, "update-index"),
        }
    }
}

/// Something that can carry out [`Operation`]s on the host
///
/// `execute` must not fail: whatever happens is folded into the returned
/// [`StepStatus`] so callers can move on to the next step.
pub trait PackageManager {
    fn execute(&mut self, operation: &Operation) -> StepStatus;

    /// Describe what `execute` would run, for display only
    fn describe(&self, operation: &Operation) -> String {
        operation.to_string()
    }
}

//! apt-based package manager for Debian-family hosts

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::runner::{CommandRunner, Invocation, StepStatus};

use super::{Operation, PackageManager};

const APT_GET: &str = "apt-get";
const ADD_APT_REPOSITORY: &str = "add-apt-repository";

/// Drives `apt-get` and `add-apt-repository` through a [`CommandRunner`]
pub struct Apt<R: CommandRunner> {
    runner: R,
    escalation: Option<String>,
    assume_yes: bool,
}

impl<R: CommandRunner> Apt<R> {
    pub fn new(runner: R, config: &BootstrapConfig) -> Self {
        Self {
            runner,
            escalation: config.escalation_program().map(str::to_string),
            assume_yes: config.assume_yes,
        }
    }

    /// The exact process `operation` maps to
    pub fn invocation(&self, operation: &Operation) -> Invocation {
        let yes = self.assume_yes.then_some("-y");
        let base = match operation {
            Operation::Install { package } => Invocation::new(
                APT_GET,
                ["install"]
                    .into_iter()
                    .chain(yes)
                    .chain([package.as_str()]),
            ),
            Operation::AddRepository { repository } => Invocation::new(
                ADD_APT_REPOSITORY,
                yes.into_iter().chain([repository.as_str()]),
            ),
            Operation::RefreshIndex => Invocation::new(APT_GET, ["update"]),
        };
        base.escalated(self.escalation.as_deref())
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> PackageManager for Apt<R> {
    fn execute(&mut self, operation: &Operation) -> StepStatus {
        let invocation = self.invocation(operation);
        match self.runner.run(&invocation) {
            Ok(status) => status,
            Err(e @ BootstrapError::CommandSpawnFailed { .. }) => StepStatus::NotStarted {
                reason: e.to_string(),
            },
            Err(e) => StepStatus::Abandoned {
                reason: e.to_string(),
            },
        }
    }

    fn describe(&self, operation: &Operation) -> String {
        self.invocation(operation).to_string()
    }
}

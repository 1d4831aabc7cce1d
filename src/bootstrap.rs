//! The bootstrap sequence
//!
//! Five fixed steps, issued strictly in order. A step's result is recorded but
//! never consulted before starting the next one: a failed repository
//! registration still leads to the index refresh and both installs.

use crate::package_manager::{Operation, PackageManager};
use crate::runner::StepStatus;
use crate::ui::StepReporter;

/// Helper that provides `add-apt-repository`
pub const REPOSITORY_HELPER_PACKAGE: &str = "software-properties-common";
/// Third-party repository carrying the Ethereum client
pub const ETHEREUM_REPOSITORY: &str = "ppa:ethereum/ethereum";
pub const ETHEREUM_PACKAGE: &str = "ethereum";
pub const SOLIDITY_PACKAGE: &str = "solc";

/// The operations a bootstrap issues, in order
pub fn default_plan() -> Vec<Operation> {
    vec![
        Operation::install(REPOSITORY_HELPER_PACKAGE),
        Operation::add_repository(ETHEREUM_REPOSITORY),
        Operation::RefreshIndex,
        Operation::install(ETHEREUM_PACKAGE),
        Operation::install(SOLIDITY_PACKAGE),
    ]
}

/// Result of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// 1-based position in the plan
    pub index: usize,
    pub operation: Operation,
    pub status: StepStatus,
}

/// Outcomes of a whole run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub outcomes: Vec<StepOutcome>,
}

impl BootstrapReport {
    /// Exit code of the last step attempted, 0 for an empty plan
    pub fn exit_code(&self) -> i32 {
        self.outcomes
            .last()
            .map_or(0, |outcome| outcome.status.exit_code())
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Runs a plan against a [`PackageManager`]
pub struct Bootstrapper<'a, P: PackageManager> {
    manager: P,
    reporter: &'a mut dyn StepReporter,
}

impl<'a, P: PackageManager> Bootstrapper<'a, P> {
    pub fn new(manager: P, reporter: &'a mut dyn StepReporter) -> Self {
        Self { manager, reporter }
    }

    /// Attempt every operation in `plan`, one at a time
    pub fn run(&mut self, plan: &[Operation]) -> BootstrapReport {
        let total = plan.len();
        let mut report = BootstrapReport::default();

        for (i, operation) in plan.iter().enumerate() {
            let index = i + 1;
            let command_line = self.manager.describe(operation);
            self.reporter
                .step_started(index, total, operation, &command_line);

            let status = self.manager.execute(operation);
            self.reporter.step_finished(index, total, operation, &status);

            report.outcomes.push(StepOutcome {
                index,
                operation: operation.clone(),
                status,
            });
        }

        self.reporter.finished(&report);
        report
    }

    #[cfg(test)]
    pub fn manager(&self) -> &P {
        &self.manager
    }
}

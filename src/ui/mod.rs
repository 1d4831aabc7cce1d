//! Step progress presentation
//!
//! All progress output for a bootstrap goes through the [`StepReporter`]
//! trait, so the implementation can follow command-line flags:
//! - [`ConsoleReporter`]: styled step headers and a summary (default)
//! - [`SilentReporter`]: nothing at all (`--quiet`)
//!
//! The package manager's own output is inherited by the child processes and
//! is not routed through here.

use console::Style;

use crate::bootstrap::BootstrapReport;
use crate::package_manager::Operation;
use crate::runner::StepStatus;

/// Receives progress events while a plan runs
pub trait StepReporter {
    /// Called right before step `index` of `total` is started
    fn step_started(&mut self, index: usize, total: usize, operation: &Operation, command_line: &str);

    /// Called once the step's process has exited (or failed to start)
    fn step_finished(&mut self, index: usize, total: usize, operation: &Operation, status: &StepStatus);

    /// Called after the last step
    fn finished(&mut self, report: &BootstrapReport);
}

/// Prints styled progress to the terminal
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

fn step_prefix(index: usize, total: usize) -> String {
    format!("[{index}/{total}]")
}

impl StepReporter for ConsoleReporter {
    fn step_started(&mut self, index: usize, total: usize, operation: &Operation, command_line: &str) {
        println!(
            "{} {}",
            Style::new().bold().cyan().apply_to(step_prefix(index, total)),
            Style::new().bold().apply_to(operation.summary())
        );
        if self.verbose {
            println!("      {} {}", Style::new().dim().apply_to("$"), command_line);
        }
    }

    fn step_finished(&mut self, index: usize, total: usize, operation: &Operation, status: &StepStatus) {
        if status.is_success() {
            if self.verbose {
                println!(
                    "{} {} {}",
                    Style::new().bold().cyan().apply_to(step_prefix(index, total)),
                    operation,
                    Style::new().green().apply_to(status)
                );
            }
        } else {
            // Reported but never acted upon: the next step starts regardless.
            eprintln!(
                "{} {} {}",
                Style::new().bold().yellow().apply_to(step_prefix(index, total)),
                operation,
                Style::new().yellow().apply_to(status)
            );
        }
    }

    fn finished(&mut self, report: &BootstrapReport) {
        let total = report.outcomes.len();
        if report.all_succeeded() {
            println!(
                "{}",
                Style::new()
                    .bold()
                    .green()
                    .apply_to(format!("Bootstrap finished: {total} steps attempted"))
            );
        } else {
            let failed = report.failures().count();
            println!(
                "{}",
                Style::new().bold().yellow().apply_to(format!(
                    "Bootstrap finished: {total} steps attempted, {failed} reported failure"
                ))
            );
        }
    }
}

/// No-op reporter for `--quiet`
#[derive(Debug, Default)]
pub struct SilentReporter;

impl StepReporter for SilentReporter {
    fn step_started(&mut self, _index: usize, _total: usize, _operation: &Operation, _command_line: &str) {}

    fn step_finished(&mut self, _index: usize, _total: usize, _operation: &Operation, _status: &StepStatus) {}

    fn finished(&mut self, _report: &BootstrapReport) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::StepOutcome;

    fn sample_report() -> BootstrapReport {
        BootstrapReport {
            outcomes: vec![
                StepOutcome {
                    index: 1,
                    operation: Operation::RefreshIndex,
                    status: StepStatus::Failed { code: Some(100) },
                },
                StepOutcome {
                    index: 2,
                    operation: Operation::install("solc"),
                    status: StepStatus::Succeeded,
                },
            ],
        }
    }

    #[test]
    fn test_step_prefix() {
        assert_eq!(step_prefix(2, 5), "[2/5]");
    }

    #[test]
    fn test_silent_reporter_no_ops() {
        let mut reporter = SilentReporter;
        let op = Operation::install("ethereum");

        // All methods should do nothing and not panic
        reporter.step_started(1, 5, &op, "sudo apt-get install -y ethereum");
        reporter.step_finished(1, 5, &op, &StepStatus::Failed { code: Some(1) });
        reporter.finished(&sample_report());
    }

    #[test]
    fn test_console_reporter_handles_all_statuses() {
        let mut reporter = ConsoleReporter::new(true);
        let op = Operation::add_repository("ppa:ethereum/ethereum");

        reporter.step_started(2, 5, &op, "sudo add-apt-repository -y ppa:ethereum/ethereum");
        reporter.step_finished(2, 5, &op, &StepStatus::Succeeded);
        reporter.step_finished(
            2,
            5,
            &op,
            &StepStatus::NotStarted {
                reason: "No such file or directory".to_string(),
            },
        );
        reporter.finished(&sample_report());
    }
}

//! Run command implementation
//!
//! Resolves configuration, wires the apt package manager to a runner and
//! reporter, and hands back the exit code of the last step.

use std::path::Path;

use crate::bootstrap::{Bootstrapper, default_plan};
use crate::cli::RunArgs;
use crate::commands::OutputOptions;
use crate::config::{BootstrapConfig, ConfigOverrides};
use crate::error::Result;
use crate::package_manager::Apt;
use crate::runner::{DryRunRunner, SystemRunner};
use crate::ui::{ConsoleReporter, SilentReporter, StepReporter};

impl From<&RunArgs> for ConfigOverrides {
    fn from(args: &RunArgs) -> Self {
        Self {
            no_escalation: args.no_escalation,
            step_timeout_secs: args.step_timeout,
        }
    }
}

fn reporter_for(output: OutputOptions) -> Box<dyn StepReporter> {
    if output.quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(output.verbose))
    }
}

/// Run the bootstrap and return the process exit code
///
/// Only configuration problems are returned as errors. Step failures are
/// folded into the exit code, which is that of the last step.
pub fn run(config_path: Option<&Path>, output: OutputOptions, args: &RunArgs) -> Result<i32> {
    let config = BootstrapConfig::resolve(config_path, &ConfigOverrides::from(args))?;
    let plan = default_plan();
    let mut reporter = reporter_for(output);

    let report = if args.dry_run {
        let apt = Apt::new(DryRunRunner, &config);
        Bootstrapper::new(apt, &mut *reporter).run(&plan)
    } else {
        let apt = Apt::new(SystemRunner::new(config.step_timeout()), &config);
        Bootstrapper::new(apt, &mut *reporter).run(&plan)
    };

    Ok(report.exit_code())
}

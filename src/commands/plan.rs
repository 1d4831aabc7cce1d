//! Plan command implementation

use std::path::Path;

use console::Style;
use serde::Serialize;

use crate::bootstrap::default_plan;
use crate::cli::PlanArgs;
use crate::config::{BootstrapConfig, ConfigOverrides};
use crate::error::Result;
use crate::package_manager::{Apt, Operation};
use crate::runner::{DryRunRunner, Invocation};

/// One step as shown by `plan`
#[derive(Debug, Serialize)]
pub struct PlanEntry {
    pub index: usize,
    pub operation: Operation,
    pub command: Invocation,
}

/// Build the plan entries for `config` without running anything
pub fn plan_entries(config: &BootstrapConfig) -> Vec<PlanEntry> {
    let apt = Apt::new(DryRunRunner, config);
    default_plan()
        .into_iter()
        .enumerate()
        .map(|(i, operation)| PlanEntry {
            index: i + 1,
            command: apt.invocation(&operation),
            operation,
        })
        .collect()
}

fn display_plan(entries: &[PlanEntry]) {
    let total = entries.len();
    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Bootstrap plan ({total} steps):"))
    );
    for entry in entries {
        println!(
            "  {} {}",
            Style::new()
                .bold()
                .cyan()
                .apply_to(format!("[{}/{}]", entry.index, total)),
            entry.operation.summary()
        );
        println!("        {}", Style::new().dim().apply_to(&entry.command));
    }
}

/// Run plan command
pub fn run(config_path: Option<&Path>, args: &PlanArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        no_escalation: args.no_escalation,
        step_timeout_secs: None,
    };
    let config = BootstrapConfig::resolve(config_path, &overrides)?;
    let entries = plan_entries(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        display_plan(&entries);
    }

    Ok(())
}

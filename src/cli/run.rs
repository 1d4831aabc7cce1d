use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Run every step:\n    evm-bootstrap run\n\n\
                  Print the commands instead of running them:\n    evm-bootstrap run --dry-run\n\n\
                  Already root, skip sudo:\n    evm-bootstrap run --no-escalation\n\n\
                  Limit each step to ten minutes:\n    evm-bootstrap run --step-timeout 600")]
pub struct RunArgs {
    /// Print each command instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Kill a step that runs longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub step_timeout: Option<u64>,

    /// Do not prefix commands with the escalation program (sudo)
    #[arg(long)]
    pub no_escalation: bool,
}

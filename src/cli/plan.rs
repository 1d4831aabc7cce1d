use clap::Parser;

/// Arguments for the plan command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the steps:\n    evm-bootstrap plan\n\n\
                  Show the steps as JSON:\n    evm-bootstrap plan --json\n\n\
                  Show the steps without sudo:\n    evm-bootstrap plan --no-escalation")]
pub struct PlanArgs {
    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Show commands without the escalation program
    #[arg(long)]
    pub no_escalation: bool,
}

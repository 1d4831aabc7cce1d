//! External process execution
//!
//! Every step boils down to one [`Invocation`]. Runners execute it and report a
//! [`StepStatus`]; they never capture or parse the child's output.

use std::fmt;
use std::process::{Child, Command, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{BootstrapError, Result};

/// How often a child is polled while a step timeout is active
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A single external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run this invocation through `escalation` (e.g. `sudo apt-get update`)
    #[must_use]
    pub fn escalated(self, escalation: Option<&str>) -> Self {
        match escalation {
            Some(prefix) => {
                let mut args = Vec::with_capacity(self.args.len() + 1);
                args.push(self.program);
                args.extend(self.args);
                Self {
                    program: prefix.to_string(),
                    args,
                }
            }
            None => self,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Observed result of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    /// Exited non-zero; `code` is `None` when killed by a signal
    Failed { code: Option<i32> },
    /// The process could not be spawned at all
    NotStarted { reason: String },
    TimedOut { after: Duration },
    /// Spawned, but its exit could not be observed or it could not be stopped
    Abandoned { reason: String },
}

impl StepStatus {
    pub fn from_exit_status(status: ExitStatus) -> Self {
        if status.success() {
            StepStatus::Succeeded
        } else {
            StepStatus::Failed {
                code: status.code(),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StepStatus::Succeeded)
    }

    /// Exit code a shell would report for this step
    pub fn exit_code(&self) -> i32 {
        match self {
            StepStatus::Succeeded => 0,
            StepStatus::Failed { code } => code.unwrap_or(1),
            StepStatus::NotStarted { .. } => 127,
            StepStatus::TimedOut { .. } => 124,
            StepStatus::Abandoned { .. } => 1,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Succeeded => write!(f, "ok"),
            StepStatus::Failed { code: Some(code) } => write!(f, "failed with exit code {code}"),
            StepStatus::Failed { code: None } => write!(f, "terminated by signal"),
            StepStatus::NotStarted { reason } => write!(f, "could not start: {reason}"),
            StepStatus::TimedOut { after } => write!(f, "timed out after {}s", after.as_secs()),
            StepStatus::Abandoned { reason } => write!(f, "lost track of process: {reason}"),
        }
    }
}

/// Executes invocations
pub trait CommandRunner {
    /// Run `invocation` to completion.
    ///
    /// `Err(CommandSpawnFailed)` means nothing was started; any other error
    /// means the process was started but its end could not be observed.
    fn run(&mut self, invocation: &Invocation) -> Result<StepStatus>;
}

/// Runs invocations as real child processes with inherited stdio
///
/// With a timeout, each child leads its own process group so that expiry can
/// kill everything it started, including grandchildren behind `sudo`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn wait_with_timeout(
        child: &mut Child,
        program: &str,
        timeout: Duration,
    ) -> Result<StepStatus> {
        let started = Instant::now();
        loop {
            let polled = child.try_wait().map_err(|e| wait_failed(program, &e))?;
            if let Some(status) = polled {
                return Ok(StepStatus::from_exit_status(status));
            }
            if started.elapsed() >= timeout {
                stop(child, program)?;
                return Ok(StepStatus::TimedOut { after: timeout });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<StepStatus> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            if self.timeout.is_some() {
                command.process_group(0);
            }
        }

        let mut child = command
            .spawn()
            .map_err(|e| BootstrapError::CommandSpawnFailed {
                program: invocation.program.clone(),
                reason: e.to_string(),
            })?;

        match self.timeout {
            Some(timeout) => Self::wait_with_timeout(&mut child, &invocation.program, timeout),
            None => {
                let status = child
                    .wait()
                    .map_err(|e| wait_failed(&invocation.program, &e))?;
                Ok(StepStatus::from_exit_status(status))
            }
        }
    }
}

fn wait_failed(program: &str, e: &std::io::Error) -> BootstrapError {
    BootstrapError::CommandWaitFailed {
        program: program.to_string(),
        reason: e.to_string(),
    }
}

/// Kill a timed-out child together with its process group and reap it
fn stop(child: &mut Child, program: &str) -> Result<()> {
    if !kill_process_group(child.id()) {
        // The group is gone when the child exited on its own since the last poll.
        if let Err(e) = child.kill() {
            let exited = child.try_wait().map_err(|e| wait_failed(program, &e))?;
            if exited.is_none() {
                return Err(BootstrapError::CommandWaitFailed {
                    program: program.to_string(),
                    reason: format!("could not kill timed-out process: {e}"),
                });
            }
        }
    }
    child.wait().map_err(|e| wait_failed(program, &e))?;
    Ok(())
}

/// Send SIGKILL to the process group led by `leader`
#[cfg(unix)]
fn kill_process_group(leader: u32) -> bool {
    use std::process::Stdio;

    // `kill` is a shell builtin, so this works whatever PATH holds.
    Command::new("/bin/sh")
        .arg("-c")
        .arg(format!("kill -KILL -{leader}"))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn kill_process_group(_leader: u32) -> bool {
    false
}

/// Prints invocations instead of running them, even under `--quiet`
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<StepStatus> {
        println!("[DRY RUN] {invocation}");
        Ok(StepStatus::Succeeded)
    }
}

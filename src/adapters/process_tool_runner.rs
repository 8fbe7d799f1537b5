use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::domain::{AppError, CommandInvocation};
use crate::ports::ToolRunner;

/// Runs the tool as a child process with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<i32, AppError> {
        let mut command = Command::new(invocation.program());
        command.args(invocation.args());

        let status = command.status().map_err(|e| AppError::ToolSpawn {
            program: invocation.program().to_string(),
            details: e.to_string(),
        })?;

        let code = exit_code(status);
        debug!(program = invocation.program(), code, "tool exited");
        Ok(code)
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

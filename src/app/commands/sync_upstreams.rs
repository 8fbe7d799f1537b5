//! `complyscribe sync-upstreams` execution.

use serde::Serialize;
use tracing::info;

use crate::domain::{
    AppError, CommandInvocation, DEFAULT_PROGRAM, InputSet, build_command_with_program,
};
use crate::ports::ToolRunner;

/// Options for the sync-upstreams command.
#[derive(Debug, Clone)]
pub struct SyncUpstreamsOptions {
    /// Program used to invoke complyscribe.
    pub program: String,
    /// Build and report the invocation without running it.
    pub preview: bool,
}

impl Default for SyncUpstreamsOptions {
    fn default() -> Self {
        Self { program: DEFAULT_PROGRAM.to_string(), preview: false }
    }
}

/// Result of the sync-upstreams command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncUpstreamsOutcome {
    /// Preview mode: the invocation that would have run.
    Previewed(CommandInvocation),
    /// The tool ran and exited with this code.
    Completed { exit_code: i32 },
}

impl SyncUpstreamsOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncUpstreamsOutcome::Previewed(_) => 0,
            SyncUpstreamsOutcome::Completed { exit_code } => *exit_code,
        }
    }
}

/// Preview output written by `--print`.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewOutput<'a> {
    /// Schema version for output format stability.
    pub schema_version: u32,
    pub program: &'a str,
    pub args: &'a [String],
}

impl<'a> PreviewOutput<'a> {
    pub fn new(invocation: &'a CommandInvocation) -> Self {
        Self { schema_version: 1, program: invocation.program(), args: invocation.args() }
    }
}

/// Build the invocation, log it, and run it unless previewing.
pub fn execute<R>(
    inputs: &InputSet,
    options: &SyncUpstreamsOptions,
    runner: &R,
) -> Result<SyncUpstreamsOutcome, AppError>
where
    R: ToolRunner + ?Sized,
{
    let invocation = build_command_with_program(&options.program, inputs);

    let rendered = serde_json::to_string(&invocation.argv())
        .map_err(|e| AppError::InternalError(format!("Failed to render command: {}", e)))?;

    if options.preview {
        info!(command = %rendered, "previewing complyscribe sync-upstreams");
        return Ok(SyncUpstreamsOutcome::Previewed(invocation));
    }

    info!(command = %rendered, "running complyscribe sync-upstreams");
    let exit_code = runner.run(&invocation)?;
    if exit_code != 0 {
        info!(exit_code, "complyscribe sync-upstreams exited with failure");
    }
    Ok(SyncUpstreamsOutcome::Completed { exit_code })
}

//! Construction of the `complyscribe sync-upstreams` argument vector.

use serde::Serialize;

use crate::domain::input_set::{InputKey, InputSet};
use crate::domain::source_list::normalize_source_list;

/// Program invoked when no override is configured.
pub const DEFAULT_PROGRAM: &str = "complyscribe";

/// Tool subcommand this entrypoint drives.
pub const SUBCOMMAND: &str = "sync-upstreams";

/// Ordered argument vector for one tool execution.
///
/// Values are discrete argv entries and never pass through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInvocation {
    program: String,
    args: Vec<String>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str)).collect()
    }
}

/// Build the invocation for the default `complyscribe` program.
pub fn build_command(inputs: &InputSet) -> CommandInvocation {
    build_command_with_program(DEFAULT_PROGRAM, inputs)
}

/// Build the invocation for an explicit program.
///
/// Required inputs come first as `--name=value` in declaration order, then
/// each boolean flag that is set. Unset booleans emit nothing.
pub fn build_command_with_program(program: &str, inputs: &InputSet) -> CommandInvocation {
    let mut args = Vec::with_capacity(1 + InputKey::REQUIRED.len() + InputKey::FLAGS.len());
    args.push(SUBCOMMAND.to_string());

    for key in InputKey::REQUIRED {
        let value = match key {
            InputKey::Sources => normalize_source_list(inputs.value(key)),
            _ => inputs.value(key).to_string(),
        };
        args.push(format!("{}={}", key.flag(), value));
    }

    for key in InputKey::FLAGS {
        if inputs.flag(key) {
            args.push(key.flag());
        }
    }

    CommandInvocation::new(program, args)
}

use crate::domain::{AppError, CommandInvocation};

/// Process-invocation boundary for the external tool.
pub trait ToolRunner {
    /// Run the invocation to completion and return the tool's exit code.
    ///
    /// A non-zero exit is a normal result, not an error. Errors are reserved
    /// for failing to start the tool at all.
    fn run(&self, invocation: &CommandInvocation) -> Result<i32, AppError>;
}

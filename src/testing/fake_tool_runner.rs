use std::sync::Mutex;

use crate::domain::{AppError, CommandInvocation};
use crate::ports::ToolRunner;

/// Records invocations instead of spawning processes.
#[derive(Default)]
pub struct FakeToolRunner {
    pub invocations: Mutex<Vec<CommandInvocation>>,
    pub exit_code: i32,
    pub spawn_error: Option<String>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self { exit_code, ..Self::default() }
    }

    pub fn failing(details: &str) -> Self {
        Self { spawn_error: Some(details.to_string()), ..Self::default() }
    }

    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<i32, AppError> {
        if let Some(details) = &self.spawn_error {
            return Err(AppError::ToolSpawn {
                program: invocation.program().to_string(),
                details: details.clone(),
            });
        }
        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(self.exit_code)
    }
}

//! Public API entry points used by the CLI and library consumers.

use std::path::Path;

use crate::adapters::ProcessToolRunner;
use crate::app::commands::sync_upstreams::{SyncUpstreamsOptions, SyncUpstreamsOutcome, execute};
use crate::app::configuration;
use crate::domain::{AppError, InputSet};

/// Load action inputs from `inputs_file` when given, else from `INPUT_*` variables.
pub fn load_inputs(inputs_file: Option<&Path>) -> Result<InputSet, AppError> {
    match inputs_file {
        Some(path) => configuration::load_inputs_file(path),
        None => configuration::read_inputs_from_env(),
    }
}

/// Run `complyscribe sync-upstreams` as a child process.
pub fn sync_upstreams(
    inputs: &InputSet,
    options: &SyncUpstreamsOptions,
) -> Result<SyncUpstreamsOutcome, AppError> {
    execute(inputs, options, &ProcessToolRunner::new())
}

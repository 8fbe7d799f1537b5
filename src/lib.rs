//! complyscribe-action: GitHub Action entrypoint for `complyscribe sync-upstreams`.
//!
//! Action inputs are loaded into an [`InputSet`], turned into an argument
//! vector by the pure [`build_command`], and handed to the tool without a shell.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{load_inputs, sync_upstreams};
pub use app::commands::sync_upstreams::{SyncUpstreamsOptions, SyncUpstreamsOutcome};
pub use app::configuration::{load_inputs_file, parse_inputs, read_inputs, read_inputs_from_env};
pub use domain::{
    AppError, CommandInvocation, InputFlags, InputKey, InputSet, build_command,
    build_command_with_program, normalize_source_list,
};

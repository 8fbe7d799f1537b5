//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::FalseyValueParser;

use crate::app::commands::output::write_workflow_output;
use crate::app::commands::sync_upstreams::{
    PreviewOutput, SyncUpstreamsOptions, SyncUpstreamsOutcome,
};
use crate::app::logging;
use crate::domain::{AppError, DEFAULT_PROGRAM};

#[derive(Parser)]
#[command(name = "complyscribe-sync-upstreams")]
#[command(version)]
#[command(
    about = "Run `complyscribe sync-upstreams` from GitHub Action inputs",
    long_about = None
)]
struct Cli {
    /// Read inputs from a YAML file instead of INPUT_* environment variables
    #[arg(long, value_name = "PATH")]
    inputs_file: Option<PathBuf>,
    /// Program used to invoke complyscribe
    #[arg(long, env = "COMPLYSCRIBE_BIN", default_value = DEFAULT_PROGRAM)]
    tool: String,
    /// Print the invocation as JSON instead of running it
    #[arg(long)]
    print: bool,
    /// Enable debug logging
    #[arg(
        short,
        long,
        env = "RUNNER_DEBUG",
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_tracing(logging::level_for(cli.verbose));

    match run_sync_upstreams(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_sync_upstreams(cli: Cli) -> Result<i32, AppError> {
    let inputs = crate::app::api::load_inputs(cli.inputs_file.as_deref())?;
    let options = SyncUpstreamsOptions { program: cli.tool, preview: cli.print };

    let outcome = crate::app::api::sync_upstreams(&inputs, &options)?;
    if let SyncUpstreamsOutcome::Previewed(invocation) = &outcome {
        write_workflow_output(&PreviewOutput::new(invocation))?;
    }
    Ok(outcome.exit_code())
}

use anyhow::Result;
use clap::Parser;

use reqres_workflow::cli::commands::{
    check::CheckCommand, records::RecordsCommand, run::RunCommand, show_usage,
};
use reqres_workflow::cli::{Cli, Commands};
use reqres_workflow::config::{config, ReqresWorkflowConfig};
use reqres_workflow::telemetry::{init_telemetry, shutdown_telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    ReqresWorkflowConfig::load_env_file()?;
    let tracing_enabled = config()?.observability.tracing_enabled;
    if tracing_enabled {
        init_telemetry()?;
    }

    let result = match cli.command {
        // Default behavior: no subcommand - explain how to run the workflow
        None => show_usage(),
        Some(Commands::Run { fixture, fail_fast }) => tokio::runtime::Runtime::new()?
            .block_on(async { RunCommand::new(fixture, fail_fast).execute().await }),
        Some(Commands::Records { fixture }) => RecordsCommand::new(fixture).execute(),
        Some(Commands::Check) => CheckCommand::new().execute(),
    };

    if tracing_enabled {
        shutdown_telemetry();
    }
    result
}

use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "reqres-workflow")]
#[command(about = "End-to-end workflow checks for the ReqRes user-management API")]
#[command(long_about = "Runs the create → update → verify → delete → verify-deletion \
                       user-management workflow against the configured ReqRes endpoint, once per fixture \
                       record, and reports per-step outcomes. Start with 'reqres-workflow run'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute the full user workflow for every fixture record
    Run {
        /// Path to the fixture file listing user records
        #[arg(long, help = "Override the configured fixture file path")]
        fixture: Option<String>,
        /// Stop at the first record whose run fails
        #[arg(long, help = "Abort remaining records after the first failed run")]
        fail_fast: bool,
    },
    /// List the fixture records without touching the network
    Records {
        /// Path to the fixture file listing user records
        #[arg(long, help = "Override the configured fixture file path")]
        fixture: Option<String>,
    },
    /// Validate configuration and show the effective endpoint settings
    Check,
}

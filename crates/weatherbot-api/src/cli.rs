//! CLI definitions for the `weatherbot` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Telegram weather bot and its log API.
#[derive(Parser)]
#[command(name = "weatherbot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(
        long,
        global = true,
        env = "WEATHERBOT_CONFIG",
        default_value = "weatherbot.toml"
    )]
    pub config: PathBuf,

    /// Detailed output (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the Telegram bot (long polling).
    Bot,

    /// Serve the read-only log API.
    Serve {
        /// Bind address; defaults to `[http] host`.
        #[arg(long)]
        host: Option<String>,

        /// Port; defaults to `[http] port`.
        #[arg(short, long)]
        port: Option<u16>,
    },
}

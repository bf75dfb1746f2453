//! Ghosthand CLI — Command-line interface for synthesizing pointer gestures.
//!
//! Usage:
//!   ghosthand play <SCRIPT>       Play a gesture script to a JSONL stream
//!   ghosthand demo <NAME>         Play a built-in demo gesture
//!   ghosthand validate <SCRIPT>   Validate a gesture script
//!   ghosthand init <PATH>         Write a template gesture script

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "ghosthand",
    about = "Synthetic pointer and touch gesture playback",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a gesture script, writing synthesized events to a JSONL file
    Play {
        /// Path to the script JSON file
        script: PathBuf,

        /// Output event stream path
        #[arg(short, long, default_value = "events.jsonl")]
        output: PathBuf,

        /// Timing strategy: fixed_interval|minimal|instant|periodic_frame|fast_periodic_frame
        #[arg(long, default_value = "fixed_interval")]
        timing: String,

        /// Interval or frame cadence in milliseconds, for the strategies that take one
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Play a built-in demo gesture
    Demo {
        /// Demo name: tap|drag|pinch
        name: String,

        /// Output event stream path
        #[arg(short, long, default_value = "events.jsonl")]
        output: PathBuf,

        /// Timing strategy
        #[arg(long, default_value = "instant")]
        timing: String,

        /// Interval or frame cadence in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Validate a gesture script without playing it
    Validate {
        /// Path to the script JSON file
        script: PathBuf,
    },

    /// Write a template gesture script
    Init {
        /// Destination path for the new script
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    ghosthand_common::logging::init_logging(&ghosthand_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Play {
            script,
            output,
            timing,
            interval_ms,
        } => commands::play::run(script, output, timing, interval_ms).await,
        Commands::Demo {
            name,
            output,
            timing,
            interval_ms,
        } => commands::demo::run(name, output, timing, interval_ms).await,
        Commands::Validate { script } => commands::validate::run(script),
        Commands::Init { path } => commands::init::run(path),
    }
}

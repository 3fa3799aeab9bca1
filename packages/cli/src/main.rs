mod commands;
mod config;
mod notify;
mod render;
mod screen;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use client::{CheckSession, CodeforcesSource};
use tracing::{Level, debug};

use crate::commands::check::CheckArgs;
use crate::config::{SourceOverrides, load_source_config};
use crate::notify::TerminalNotifier;
use crate::screen::{Screen, TermConsole};

#[derive(Parser, Debug)]
#[command(
    name = "skipwatch",
    version,
    about = "Flag Codeforces contests in which every submission of a user was skipped"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Codeforces API base URL.
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a single handle and exit.
    Check {
        /// Codeforces handle.
        handle: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Prompt for handles repeatedly (default).
    Interactive,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let source_config = load_source_config(&SourceOverrides {
        base_url: cli.global.base_url.clone(),
        timeout_secs: cli.global.timeout_secs,
    })
    .context("Failed to load config")?;
    debug!(base_url = %source_config.base_url, "Using submission source");

    let source = CodeforcesSource::new(&source_config).context("Failed to build HTTP client")?;
    let verbose = cli.global.verbose > 0;
    // Log lines would land between the loading line and its removal.
    let screen = Arc::new(Screen::new(TermConsole::default(), !verbose));
    let session = CheckSession::new(
        Arc::new(source),
        Arc::new(TerminalNotifier::new(screen.clone())),
    );

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Check { handle, json } => {
            commands::check::run(
                &session,
                &screen,
                CheckArgs {
                    handle,
                    json,
                    verbose,
                },
            )
            .await
        }
        Command::Interactive => {
            commands::interactive::run(&session, &screen, verbose).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

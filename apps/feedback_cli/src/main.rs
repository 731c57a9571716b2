use std::{
    io::{self, Stdout},
    path::PathBuf,
    process::ExitCode,
};

mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{AnalysisClient, HttpAnalysisClient};
use feedback_ui::{CycleOutcome, FeedbackAnalysisController, Key, KeyChord};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_settings, validate_server_url},
    terminal::TerminalView,
};

type Controller = FeedbackAnalysisController<TerminalView<Stdout>, HttpAnalysisClient>;

#[derive(Parser, Debug)]
#[command(about = "Analyze customer feedback for emotion and sentiment")]
struct Cli {
    /// Base url of the analysis service; overrides config file and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single piece of feedback and exit.
    Analyze { text: String },
    /// Check that the analysis service is up.
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(io::stderr)
        .init();

    let server_url = validate_server_url(&settings.server_url)?;
    let client = HttpAnalysisClient::new(server_url.as_str())
        .context("failed to build analysis client")?;
    tracing::debug!(%server_url, "analysis service configured");

    match cli.command {
        Some(Command::Health) => check_health(&client).await,
        Some(Command::Analyze { text }) => {
            let mut view = TerminalView::new(io::stdout());
            view.set_input(text);
            let controller = FeedbackAnalysisController::new(view, client);
            Ok(exit_code(&controller.submit().await))
        }
        None => {
            let controller = FeedbackAnalysisController::new(TerminalView::new(io::stdout()), client);
            run_interactive(&controller).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn check_health(client: &HttpAnalysisClient) -> Result<ExitCode> {
    match client.health().await {
        Ok(health) => {
            println!(
                "{} {}: {}",
                health.service.as_deref().unwrap_or("analysis service"),
                health.version.as_deref().unwrap_or("unknown version"),
                health.status
            );
            Ok(if health.is_healthy() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            println!("analysis service unreachable");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn exit_code(outcome: &CycleOutcome) -> ExitCode {
    match outcome {
        CycleOutcome::Rendered(_) => ExitCode::SUCCESS,
        CycleOutcome::Ignored | CycleOutcome::Failed(_) => ExitCode::FAILURE,
    }
}

/// Lines build up the feedback text; an empty line stands in for Ctrl+Enter.
async fn run_interactive(controller: &Controller) -> Result<()> {
    println!("Type feedback, then an empty line to analyze. `:clear` resets, `:quit` exits.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match line.trim_end() {
            ":quit" => break,
            ":clear" => controller.clear().await,
            "" => {
                if !controller.view().await.accepts_submit() {
                    continue;
                }
                let chord = KeyChord::new(Key::Enter).with_ctrl();
                if let Some(outcome) = controller.handle_key(chord).await {
                    tracing::debug!(?outcome, "analysis cycle complete");
                }
            }
            text => controller.view().await.append_input_line(text),
        }
    }

    Ok(())
}

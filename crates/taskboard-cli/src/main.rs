mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use taskboard_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "taskboard",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let file_path = cli
        .file
        .or_else(|| {
            AppConfig::load()
                .data_file
                .map(|path| path.display().to_string())
        })
        .ok_or_else(|| {
            anyhow::anyhow!("--file is required (or set TASKBOARD_FILE, or data_file in config)")
        })?;

    match cli.command {
        Commands::Board(cmd) => handlers::board::handle(&file_path, cmd.action).await?,
        Commands::Column(cmd) => handlers::column::handle(&file_path, cmd.action).await?,
        Commands::Task(cmd) => handlers::task::handle(&file_path, cmd.action).await?,
        Commands::Automation(cmd) => handlers::automation::handle(&file_path, cmd.action).await?,
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

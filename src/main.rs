use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jeopardy::{config::AppConfig, console, protocol::BoardEvent, state::Board};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Logs go to stderr, stdout carries the event stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jeopardy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Jeopardy board...");

    let config = AppConfig::from_env();
    let mut board = Board::with_teams(config.teams);

    if let Some(path) = config.import_csv.clone() {
        load_initial_questions(&mut board, path).await;
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    console::run(stdin, stdout, &mut board, &config).await
}

async fn load_initial_questions(board: &mut Board, path: PathBuf) {
    match console::handlers::handle_import(board, path).await {
        BoardEvent::Error { msg, .. } => {
            tracing::warn!("Starting with an empty board: {}", msg);
        }
        _ => tracing::info!("Loaded {} categories", board.categories.len()),
    }
}

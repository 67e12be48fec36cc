use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use jirei_forest::api::{AppState, create_router};
use jirei_forest::backend::DiscoveryEngineClient;
use jirei_forest::config::Config;
use jirei_forest::corpus::CorpusTable;
use jirei_forest::data_models::Corpus;
use jirei_forest::dispatcher::Dispatcher;

#[derive(Parser)]
#[command(about = "Case study, docs and event session search for the agent tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the tool endpoints over HTTP.
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run one search and print the answer.
    Search {
        #[arg(long, default_value = "case-study")]
        corpus: Corpus,
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let backend = Arc::new(DiscoveryEngineClient::from_config(&config));
    let dispatcher = Arc::new(Dispatcher::new(backend, CorpusTable::from_config(&config)));

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.bind_addr.clone());
            let app = create_router(Arc::new(AppState::new(dispatcher)));
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await.context("Server error")?;
        }
        Command::Search { corpus, query } => {
            let answer = dispatcher.dispatch(&query, corpus).await;
            println!("{answer}");
        }
    }
    Ok(())
}

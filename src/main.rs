mod app;
mod catalog;
mod cli;
mod command;
mod config;
mod error;
mod favorites;
mod feed;
mod map;
mod models;
mod navigation;
mod screens;
mod store;

use anyhow::Context;
use app::{App, Outcome};
use catalog::{Catalog, JsonFileSource, ListingSource, SeedSource};
use clap::Parser;
use cli::Cli;
use config::Config;
use store::{AppState, StoreHandle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🏠 Housing Browser");

    let source: Box<dyn ListingSource> = match &config.catalog {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SeedSource),
    };
    let properties = source.load().await?;
    let catalog = Catalog::from_properties(properties)
        .with_context(|| format!("Invalid catalog from {} source", source.source_name()))?;
    if catalog.is_empty() {
        warn!("Catalog from {} source has no listings", source.source_name());
    }
    info!(
        "✅ Loaded {} properties from {} source",
        catalog.len(),
        source.source_name()
    );

    let mut app = App::new(StoreHandle::new(AppState::new(catalog)));

    match &config.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run_session(&mut app, BufReader::new(file)).await?;
        }
        None => run_session(&mut app, BufReader::new(tokio::io::stdin())).await?,
    }

    let favorites = app.store().read().await.favorites.len();
    info!("Session ended with {} favorites", favorites);

    Ok(())
}

/// Render home, then one screen per command until `quit` or end of input
async fn run_session<R>(app: &mut App, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut stdout = tokio::io::stdout();
    let home = app.render_current().await;
    stdout.write_all(home.as_bytes()).await?;
    stdout
        .write_all(format!("{}> ", app.current_route().name()).as_bytes())
        .await?;
    stdout.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match app.handle_line(&line).await {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(Outcome::Render(text))) => stdout.write_all(text.as_bytes()).await?,
            Ok(None) => {}
            Err(err) => {
                warn!("Command failed: {:#}", err);
                stdout
                    .write_all(format!("error: {:#}\n", err).as_bytes())
                    .await?;
            }
        }
        stdout
            .write_all(format!("{}> ", app.current_route().name()).as_bytes())
            .await?;
        stdout.flush().await?;
    }

    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

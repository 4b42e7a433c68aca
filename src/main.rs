use anyhow::Context;
use clap::Parser;

use asana_replica_api::{app, cli::Cli, config, database, init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and friends
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = cli.apply(config::config().clone());
    tracing::info!(
        "Starting Asana replica API in {:?} mode with {:?} store",
        config.environment,
        config.store.backend
    );

    let store = database::connect(&config.store)
        .await
        .context("failed to initialize document store")?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let app = app(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

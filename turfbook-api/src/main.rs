use std::net::SocketAddr;
use anyhow::Context;
use turfbook_api::{app, AppState};
use turfbook_catalog::Catalog;
use turfbook_core::AuthStore;
use turfbook_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TurfBook API on port {}", config.server.port);

    let catalog = Catalog::bundled().context("Failed to load turf catalog")?;
    tracing::info!("Loaded {} turfs", catalog.len());

    let storage = turfbook_store::open_storage(&config.storage)?;
    let auth = AuthStore::initialize(storage, config.storage.session_key.clone(), config.identity.clone())
        .await
        .context("Failed to restore session")?;

    let app = app(AppState::new(catalog, auth));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use db::{
    DBService,
    storage::{KeyValueStorage, SqliteSlotStorage},
};
use server::{AppState, routes};
use services::services::{
    clock::SystemClock,
    config::{load_config_from_file, save_config_to_file},
    shell::AppShell,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utils::assets::{asset_dir, config_path};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!(path = %asset_dir().display(), "Using asset directory");

    let config_path = config_path();
    let config = load_config_from_file(&config_path);
    if !config_path.exists() {
        if let Err(e) = save_config_to_file(&config, &config_path) {
            warn!(path = %config_path.display(), error = %e, "Failed to write default config");
        }
    }

    let db = DBService::new()
        .await
        .context("failed to open the local database")?;
    let storage: Arc<dyn KeyValueStorage> = Arc::new(SqliteSlotStorage::from(&db));
    let shell = AppShell::open(storage, &config, Arc::new(SystemClock)).await;

    let app = routes::router(AppState::new(shell));

    let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

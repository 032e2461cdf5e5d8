use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use yatra::catalog::Catalog;
use yatra::config::{self, YatraConfig};
use yatra::web;

#[tokio::main]
async fn main() -> Result<()> {
    // Install the subscriber before loading the config, which may warn
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::env_log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = YatraConfig::load();
    tracing::info!(version = yatra::VERSION, "Starting yatra");

    let catalog = Catalog::from_json_file(&config.data.path)
        .with_context(|| format!("Failed to load catalog from {}", config.data.path))?;
    let orphans = catalog.orphaned_attractions();
    if !orphans.is_empty() {
        tracing::warn!(
            count = orphans.len(),
            "Catalog has attractions referencing unknown destinations"
        );
    }

    web::run(&config.server, Arc::new(catalog)).await
}

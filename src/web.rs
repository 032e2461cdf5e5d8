//! Web server wiring: CORS and serving the API router

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api;
use crate::catalog::Catalog;
use crate::config::ServerConfig;

/// Bind and serve the API until the process is stopped
pub async fn run(config: &ServerConfig, catalog: Arc<Catalog>) -> Result<()> {
    let app = Router::new()
        .nest("/api", api::router(catalog))
        .layer(cors_layer(&config.allow_origins));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{addr}");
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn cors_layer(allow_origins: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if allow_origins.trim() == "*" {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allow_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

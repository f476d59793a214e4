//! Stress API: HTTP boundary for stress-type results
pub mod config;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{routing::get, Router};
use std::sync::Arc;
use stress_out::renderer::TemplateRenderer;
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ConfigError};
use metrics::Metrics;

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub config: ApiConfig,
    pub renderer: TemplateRenderer<'static>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let renderer = match &config.templates_path {
            Some(path) => TemplateRenderer::load(path),
            None => TemplateRenderer::builtin(),
        }
        .map_err(anyhow::Error::msg)?;

        Ok(Self {
            config,
            renderer,
            metrics: Metrics::new()?,
        })
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/result", get(handlers::result_page))
        .route("/v1/interpret", get(handlers::interpret))
        .route("/v1/categories", get(handlers::list_categories))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let addr = config.addr.clone();
    let fallback = config.fallback;
    let state = Arc::new(AppState::new(config)?);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %fallback, "stress API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#![forbid(unsafe_code)]

//! Read-only gateway in front of the public creature catalog.
//!
//! Every inbound route maps to exactly one [`UpstreamResource`]; successful
//! upstream bodies are relayed untouched and failures collapse into the
//! route's fixed `{"error": ...}` shape.

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use bijux_dex_api::routes;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod middleware;
mod upstream;

pub use config::{
    validate_startup_config, ApiConfig, UpstreamConfig, DEFAULT_BIND_ADDR,
    DEFAULT_UPSTREAM_BASE_URL,
};
pub use upstream::fake::FakeUpstream;
pub use upstream::http::HttpUpstream;
pub use upstream::{CatalogUpstream, UpstreamError, UpstreamResource};

pub const CRATE_NAME: &str = "bijux-dex-server";

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn CatalogUpstream>,
    pub api: ApiConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Arc<dyn CatalogUpstream>) -> Self {
        Self::with_config(upstream, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(upstream: Arc<dyn CatalogUpstream>, api: ApiConfig) -> Self {
        Self {
            upstream,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::LANDING, get(http::landing::landing_handler))
        .route(routes::HEALTHZ, get(http::handlers::healthz_handler))
        .route(routes::RECORDS, get(http::handlers::list_records_handler))
        .route(routes::RECORD, get(http::handlers::record_handler))
        .route(
            routes::RECORD_SEARCH,
            get(http::handlers::record_search_handler),
        )
        .route(routes::TYPES, get(http::handlers::types_handler))
        .route(routes::TYPE, get(http::handlers::type_handler))
        .route(routes::ABILITIES, get(http::handlers::abilities_handler))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::cors::cors_middleware,
        ))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}

//! Web front end for the candlelens candle analyzer.
//!
//! Three routes, all GET: `/` serves the embedded single-page form, `/ping`
//! is a liveness check, and `/api` returns the classification report as JSON.

pub mod api;
pub mod error;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use candlelens_core::CandleAnalyzer;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<CandleAnalyzer>,
}

/// Build the router for the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(api::home))
        .route("/ping", get(api::ping))
        .route("/api", get(api::analyze))
        .layer(cors)
        .with_state(state)
}

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use candlelens_core::CandleReport;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

const INDEX_PAGE: &str = include_str!("../assets/index.html");

/// Query parameters for `GET /api`.
///
/// `days` is accepted as a raw string so a non-integer value surfaces as our
/// own 400 instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub symbol: Option<String>,
    pub days: Option<String>,
}

/// GET / - single-page form driving the API.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// GET /ping - liveness check.
pub async fn ping() -> &'static str {
    "ok"
}

/// GET /api?symbol=700%20HK&days=20 - classify the trailing window.
pub async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
) -> Result<Json<CandleReport>, ApiError> {
    let symbol = params.symbol.as_deref().unwrap_or("").trim().to_owned();
    if symbol.is_empty() {
        return Err(ApiError::InvalidSymbol);
    }

    let days_raw = params.days.as_deref().unwrap_or("20").trim();
    let days: i64 = days_raw.parse().map_err(|_| ApiError::InvalidDays)?;

    let report = state.analyzer.analyze(&symbol, days).await?;
    info!(
        symbol = %report.symbol,
        ticker = %report.ticker,
        days = report.days,
        "analysis served"
    );

    Ok(Json(report))
}

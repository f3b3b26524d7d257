use std::sync::Arc;

use candlelens_core::{AnalyzerConfig, CandleAnalyzer, ReqwestHttpClient, YahooChartAdapter};
use candlelens_web::{app, AppState};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let transport = Arc::new(ReqwestHttpClient::new());
    let source = Arc::new(YahooChartAdapter::with_http_client(transport));
    let analyzer = Arc::new(CandleAnalyzer::new(source, AnalyzerConfig::default()));

    let state = AppState { analyzer };
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("candlelens listening on http://0.0.0.0:{port}");
    tracing::info!("  GET /               analyzer form");
    tracing::info!("  GET /ping           liveness check");
    tracing::info!("  GET /api?symbol=700%20HK&days=20");

    axum::serve(listener, router).await?;
    Ok(())
}

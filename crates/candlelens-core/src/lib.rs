//! # Candlelens Core
//!
//! Domain contracts and the candle classification engine for candlelens.
//!
//! ## Overview
//!
//! Two stateless pure transforms sit at the center of this crate:
//!
//! - **Ticker normalization** ([`Ticker::normalize`]) maps human-entered
//!   symbols like `700 HK` or `NVDA US` to canonical provider tickers.
//! - **Candle classification** ([`classify`]) counts bullish, bearish, doji,
//!   and upper/lower-shadow days over a window of daily OHLC bars.
//!
//! Around them, the crate carries the plumbing a caller layer needs:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo chart endpoint) |
//! | [`analyzer`] | Normalize → fetch → window → classify orchestration |
//! | [`circuit_breaker`] | Circuit breaker for resilient upstream calls |
//! | [`data_source`] | Bar source trait and request/error types |
//! | [`domain`] | Domain models (Bar, Ticker, CandleTally) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`source`] | Provider identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use candlelens_core::{
//!     AnalyzerConfig, CandleAnalyzer, ReqwestHttpClient, YahooChartAdapter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(ReqwestHttpClient::new());
//!     let source = Arc::new(YahooChartAdapter::with_http_client(transport));
//!     let analyzer = CandleAnalyzer::new(source, AnalyzerConfig::default());
//!
//!     let report = analyzer.analyze("700 HK", 20).await?;
//!     println!("{} bullish days of {}", report.tally.bullish, report.days);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Construction of domain types validates invariants and returns
//! [`ValidationError`]; upstream failures surface as [`SourceError`] with a
//! stable string code; the analyzer folds both into [`AnalyzeError`] for the
//! web and CLI layers to map onto statuses and exit codes.

pub mod adapters;
pub mod analyzer;
pub mod circuit_breaker;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod source;

// Re-export commonly used types at crate root for convenience

pub use adapters::YahooChartAdapter;

pub use analyzer::{AnalyzeError, AnalyzerConfig, CandleAnalyzer, CandleReport};

pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};

pub use data_source::{BarSource, DailyBarsRequest, SourceError, SourceErrorKind};

pub use domain::{classify, Bar, CandleTally, CandleTolerances, Ticker, UtcDateTime};

pub use error::ValidationError;

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

pub use source::ProviderId;

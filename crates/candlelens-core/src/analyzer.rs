//! Analysis orchestration: normalize, fetch, window, classify.
//!
//! [`CandleAnalyzer`] is the single entry point the web and CLI layers call.
//! It owns no state beyond its configuration and a shared [`BarSource`], so
//! one instance can serve concurrent requests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_source::{BarSource, DailyBarsRequest, SourceError};
use crate::{classify, CandleTally, CandleTolerances, Ticker};

/// Tunables for a [`CandleAnalyzer`].
///
/// Explicit configuration instead of process-wide constants so tests can vary
/// tolerances and windows without shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    pub tolerances: CandleTolerances,
    /// Upper clamp on the look-back window, in trading days.
    pub max_lookback_days: i64,
    /// Floor on the calendar-day fetch window, so enough trading days survive
    /// after incomplete rows are dropped.
    pub min_fetch_days: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tolerances: CandleTolerances::default(),
            max_lookback_days: 252,
            min_fetch_days: 60,
        }
    }
}

/// Classification report for one symbol over a trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleReport {
    /// The symbol as the user entered it.
    pub symbol: String,
    /// The canonical provider ticker it resolved to.
    pub ticker: Ticker,
    /// Trading days actually evaluated; may be fewer than requested when the
    /// provider returns a short series.
    pub days: usize,
    #[serde(flatten)]
    pub tally: CandleTally,
}

/// Failures surfaced to caller layers, mapped there to HTTP statuses or exit
/// codes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyzeError {
    #[error("symbol is required")]
    EmptySymbol,
    #[error("no data returned for ticker '{ticker}'")]
    NoData { ticker: Ticker },
    #[error("data fetch failed: {0}")]
    Fetch(#[from] SourceError),
}

/// Stateless candle analysis service over an injected bar source.
#[derive(Clone)]
pub struct CandleAnalyzer {
    source: Arc<dyn BarSource>,
    config: AnalyzerConfig,
}

impl CandleAnalyzer {
    pub fn new(source: Arc<dyn BarSource>, config: AnalyzerConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify the trailing `days` daily candles for `symbol`.
    ///
    /// `days` is clamped to `[1, max_lookback_days]`. The provider is asked
    /// for `max(days * 2, min_fetch_days)` calendar days and the trailing
    /// `days` valid bars are evaluated.
    pub async fn analyze(&self, symbol: &str, days: i64) -> Result<CandleReport, AnalyzeError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(AnalyzeError::EmptySymbol);
        }

        let days = days.clamp(1, self.config.max_lookback_days) as usize;
        let ticker = Ticker::normalize(symbol);

        let lookback = (days * 2).max(self.config.min_fetch_days);
        let request = DailyBarsRequest::new(ticker.clone(), lookback)?;
        let mut bars = self.source.daily_bars(request).await?;

        if bars.is_empty() {
            return Err(AnalyzeError::NoData { ticker });
        }

        if bars.len() > days {
            bars.drain(..bars.len() - days);
        }

        let tally = classify(&bars, self.config.tolerances);

        Ok(CandleReport {
            symbol: symbol.to_owned(),
            ticker,
            days: bars.len(),
            tally,
        })
    }
}

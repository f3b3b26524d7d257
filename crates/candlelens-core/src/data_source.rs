//! Bar source trait and request types.
//!
//! The one upstream dependency of this system is a provider of daily OHLC
//! series. [`BarSource`] is the adapter contract for that provider; the
//! analyzer only ever talks to the trait, so tests can substitute scripted
//! sources and the web/CLI layers stay provider-agnostic.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{Bar, ProviderId, Ticker};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    InvalidRequest,
    Internal,
}

/// Structured source error surfaced to caller layers as a fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for the daily bars endpoint.
///
/// `lookback_days` is a calendar-day window, not a trading-day count; callers
/// over-fetch so enough trading days survive after dropping incomplete rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBarsRequest {
    pub ticker: Ticker,
    pub lookback_days: usize,
}

impl DailyBarsRequest {
    pub fn new(ticker: Ticker, lookback_days: usize) -> Result<Self, SourceError> {
        if lookback_days == 0 {
            return Err(SourceError::invalid_request(
                "daily bars lookback must be greater than zero",
            ));
        }
        Ok(Self {
            ticker,
            lookback_days,
        })
    }
}

/// Daily bar provider contract.
///
/// Implementations must return bars in chronological ascending order with
/// incomplete rows already dropped, and must be `Send + Sync` so a single
/// adapter can be shared across concurrent requests.
pub trait BarSource: Send + Sync {
    /// Returns the unique provider identifier.
    fn id(&self) -> ProviderId;

    /// Fetches the daily OHLC series for the requested window.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the provider is unavailable, rejects the
    /// request, or returns a payload that cannot be normalized.
    fn daily_bars<'a>(
        &'a self,
        req: DailyBarsRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Bar>, SourceError>> + Send + 'a>>;
}

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::Duration;

use crate::circuit_breaker::CircuitBreaker;
use crate::data_source::{BarSource, DailyBarsRequest, SourceError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{Bar, ProviderId, UtcDateTime, ValidationError};

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance chart adapter for daily OHLC series.
///
/// With a real transport it queries the unauthenticated v8 chart endpoint and
/// normalizes the response, dropping rows with any missing OHLC field. With a
/// mock transport it produces deterministic seeded bars so tests run offline.
#[derive(Clone)]
pub struct YahooChartAdapter {
    http_client: Arc<dyn HttpClient>,
    circuit_breaker: Arc<CircuitBreaker>,
    use_real_api: bool,
}

impl Default for YahooChartAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            circuit_breaker: Arc::new(CircuitBreaker::default()),
            use_real_api: false,
        }
    }
}

impl YahooChartAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
            ..Self::default()
        }
    }

    pub fn with_circuit_breaker(mut self, circuit_breaker: Arc<CircuitBreaker>) -> Self {
        self.circuit_breaker = circuit_breaker;
        self
    }

    async fn fetch_real_bars(&self, req: &DailyBarsRequest) -> Result<Vec<Bar>, SourceError> {
        if !self.circuit_breaker.allow_request() {
            return Err(SourceError::unavailable("yahoo circuit breaker is open"));
        }

        let endpoint = format!(
            "{}/{}?range={}d&interval=1d",
            CHART_BASE_URL,
            urlencoding::encode(req.ticker.as_str()),
            req.lookback_days
        );

        let request = HttpRequest::get(endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(10_000);

        // Non-retryable transport errors mean the request was rejected, not
        // that the upstream is unhealthy; they do not count against the breaker.
        let response = self.http_client.execute(request).await.map_err(|e| {
            if e.retryable() {
                self.circuit_breaker.record_failure();
                SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
            } else {
                SourceError::internal(format!("yahoo request rejected: {}", e.message()))
            }
        })?;

        if !response.is_success() {
            self.circuit_breaker.record_failure();
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        self.circuit_breaker.record_success();
        parse_chart_body(&response.body)
    }

    async fn fetch_fake_bars(&self, req: &DailyBarsRequest) -> Result<Vec<Bar>, SourceError> {
        // Exercise the transport so scripted failures still surface in tests.
        let probe = HttpRequest::get(format!(
            "{}/{}",
            CHART_BASE_URL,
            urlencoding::encode(req.ticker.as_str())
        ));
        let response = self
            .http_client
            .execute(probe)
            .await
            .map_err(|e| SourceError::unavailable(format!("yahoo transport error: {}", e.message())))?;
        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        let seed = ticker_seed(req.ticker.as_str());
        let today = UtcDateTime::now().into_inner();
        let mut bars = Vec::with_capacity(req.lookback_days);

        for index in 0..req.lookback_days {
            let age_days = (req.lookback_days - 1 - index) as i64;
            let ts = UtcDateTime::from_offset_datetime(today - Duration::days(age_days))
                .map_err(validation_to_error)?;
            let base = 80.0 + ((seed + index as u64) % 400) as f64 / 10.0;

            // Cycle through candle shapes so every category shows up.
            let close = match (seed + index as u64) % 4 {
                0 => base + 0.9,
                1 => base - 0.9,
                2 => base,
                _ => base + 0.4,
            };
            let high = base.max(close) + if (seed + index as u64) % 3 == 0 { 0.0 } else { 0.6 };
            let low = base.min(close) - 0.5;

            let bar = Bar::new(ts, base, high, low, close, Some(10_000 + index as u64 * 50))
                .map_err(validation_to_error)?;
            bars.push(bar);
        }

        Ok(bars)
    }
}

impl BarSource for YahooChartAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn daily_bars<'a>(
        &'a self,
        req: DailyBarsRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Bar>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real_bars(&req).await
            } else {
                self.fetch_fake_bars(&req).await
            }
        })
    }
}

/// Normalize a v8 chart payload into validated bars, skipping incomplete rows.
fn parse_chart_body(body: &str) -> Result<Vec<Bar>, SourceError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = &chart_response.chart.error {
        if !error.is_null() {
            return Err(SourceError::unavailable(format!(
                "yahoo chart API error: {error}"
            )));
        }
    }

    let result = chart_response
        .chart
        .result
        .as_deref()
        .and_then(<[YahooChartResult]>::first)
        .ok_or_else(|| SourceError::internal("no chart data in response"))?;

    let Some(timestamps) = result.timestamp.as_ref() else {
        // Valid tickers with no history return a result without timestamps.
        return Ok(Vec::new());
    };
    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| SourceError::internal("no quote data in response"))?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts_value) in timestamps.iter().enumerate() {
        let (Some(Some(open)), Some(Some(high)), Some(Some(low)), Some(Some(close))) = (
            quote.open.get(i),
            quote.high.get(i),
            quote.low.get(i),
            quote.close.get(i),
        ) else {
            continue;
        };

        let ts = UtcDateTime::from_unix_timestamp(ts_value).map_err(validation_to_error)?;
        // Negative provider volumes are garbage rows; degrade them to None.
        let volume = quote
            .volume
            .get(i)
            .copied()
            .flatten()
            .and_then(|v| u64::try_from(v).ok());

        // Rows the provider reports inconsistently (e.g. high < low) are
        // dropped rather than failing the whole series.
        if let Ok(bar) = Bar::new(ts, *open, *high, *low, *close, volume) {
            bars.push(bar);
        }
    }

    Ok(bars)
}

fn ticker_seed(ticker: &str) -> u64 {
    ticker.bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(error.to_string())
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}

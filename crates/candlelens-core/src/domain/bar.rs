use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// Daily OHLC bar record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub ts: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

impl Bar {
    pub fn new(
        ts: UtcDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<u64>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            ts,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> UtcDateTime {
        UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp")
    }

    #[test]
    fn accepts_valid_bar() {
        let bar = Bar::new(ts(), 100.0, 105.0, 95.0, 102.0, Some(1_000)).expect("must build");
        assert_eq!(bar.close, 102.0);
    }

    #[test]
    fn rejects_high_below_low() {
        let err = Bar::new(ts(), 100.0, 95.0, 105.0, 102.0, None).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBarRange));
    }

    #[test]
    fn rejects_close_outside_range() {
        let err = Bar::new(ts(), 10.0, 12.0, 9.0, 12.5, Some(10)).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBarBounds));
    }

    #[test]
    fn rejects_non_finite_price() {
        let err = Bar::new(ts(), f64::NAN, 12.0, 9.0, 10.0, None).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { field: "open" }));
    }
}

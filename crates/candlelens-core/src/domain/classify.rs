use serde::{Deserialize, Serialize};

use crate::{Bar, ValidationError};

/// Relative and absolute tolerances used by [`classify`].
///
/// `doji` is relative to the bar's open price (0.001 means a close within
/// 0.1% of the open counts as a doji). `shadow` is an absolute price amount
/// a wick must exceed to count as a shadow day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleTolerances {
    pub doji: f64,
    pub shadow: f64,
}

impl Default for CandleTolerances {
    fn default() -> Self {
        Self {
            doji: 0.001,
            shadow: 0.0,
        }
    }
}

impl CandleTolerances {
    pub fn new(doji: f64, shadow: f64) -> Result<Self, ValidationError> {
        if !doji.is_finite() || doji < 0.0 {
            return Err(ValidationError::InvalidTolerance { field: "doji" });
        }
        if !shadow.is_finite() || shadow < 0.0 {
            return Err(ValidationError::InvalidTolerance { field: "shadow" });
        }
        Ok(Self { doji, shadow })
    }
}

/// Per-category candle counts over an evaluated window.
///
/// Every field is a plain scalar count. Doji and directional counts are
/// mutually exclusive by construction; shadow counts overlap with direction,
/// so the fields do not sum to the number of bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandleTally {
    pub bullish: usize,
    pub bearish: usize,
    pub doji: usize,
    pub upper_shadow: usize,
    pub lower_shadow: usize,
}

/// Count bullish/bearish/doji and shadow days across a window of bars.
///
/// Order-independent and total: an empty window yields an all-zero tally.
/// The doji test is non-strict (`<=`); both shadow tests are strict (`>`).
///
/// A bar with a non-positive open cannot anchor the relative doji tolerance;
/// such bars are excluded from the doji test but still counted for direction
/// and shadows.
pub fn classify(bars: &[Bar], tolerances: CandleTolerances) -> CandleTally {
    let mut tally = CandleTally::default();

    for bar in bars {
        let (o, h, l, c) = (bar.open, bar.high, bar.low, bar.close);

        let is_doji = o > 0.0 && (c - o).abs() <= tolerances.doji * o;

        if is_doji {
            tally.doji += 1;
        } else if c > o {
            tally.bullish += 1;
        } else if c < o {
            tally.bearish += 1;
        }

        if h - o.max(c) > tolerances.shadow {
            tally.upper_shadow += 1;
        }
        if o.min(c) - l > tolerances.shadow {
            tally.lower_shadow += 1;
        }
    }

    tally
}

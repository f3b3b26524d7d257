//! # Domain Models
//!
//! Canonical domain types for candle analysis.
//!
//! All models are strongly typed and validated at construction time; invalid
//! bars are unrepresentable once built. The two pure transforms at the heart
//! of the system live here:
//!
//! | Type / fn | Description |
//! |-----------|-------------|
//! | [`Ticker`] | Provider ticker from a human-entered symbol |
//! | [`Bar`] | Validated daily OHLC bar |
//! | [`classify`] | Candle category counts over a bar window |
//! | [`CandleTally`] | Scalar counts per candle category |
//! | [`CandleTolerances`] | Doji/shadow tolerances |
//! | [`UtcDateTime`] | UTC-pinned RFC3339 timestamp |

mod bar;
mod classify;
mod ticker;
mod timestamp;

pub use bar::Bar;
pub use classify::{classify, CandleTally, CandleTolerances};
pub use ticker::Ticker;
pub use timestamp::UtcDateTime;

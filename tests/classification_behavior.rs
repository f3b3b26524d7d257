//! Behavior tests for the candle classifier and ticker normalizer.
//!
//! These exercise the documented boundary semantics: the doji test is
//! non-strict relative to the open price, shadow tests are strict, and the
//! counts are always plain scalar integers.

use candlelens_core::{classify, CandleTally, CandleTolerances, Ticker};
use candlelens_tests::bar_on_day;

// =============================================================================
// Classifier: totality and boundaries
// =============================================================================

#[test]
fn empty_window_classifies_to_all_zeros() {
    let tally = classify(&[], CandleTolerances::default());
    assert_eq!(tally, CandleTally::default());
}

#[test]
fn doji_boundary_uses_relative_non_strict_tolerance() {
    // Given: open 100, tolerance 0.001 -> band of 0.1 around the open
    let within = bar_on_day(0, 100.0, 101.0, 99.0, 100.05);
    let beyond = bar_on_day(1, 100.0, 101.0, 99.0, 100.2);

    // When: both bars are classified
    let tally = classify(&[within, beyond], CandleTolerances::default());

    // Then: only the close within the band counts as doji
    assert_eq!(tally.doji, 1);
    assert_eq!(tally.bullish, 1);
    assert_eq!(tally.bearish, 0);
}

#[test]
fn shadow_boundary_requires_strictly_positive_wick() {
    // Given: a bullish bar whose high equals its close
    let bar = bar_on_day(0, 10.0, 12.0, 9.0, 12.0);

    let tally = classify(&[bar], CandleTolerances::default());

    // Then: zero-length upper wick is not a shadow, one-point lower wick is
    assert_eq!(tally.upper_shadow, 0);
    assert_eq!(tally.lower_shadow, 1);
}

#[test]
fn direction_and_doji_partition_the_window() {
    let bars = vec![
        bar_on_day(0, 100.0, 102.0, 99.0, 101.0),
        bar_on_day(1, 100.0, 101.0, 98.0, 99.0),
        bar_on_day(2, 100.0, 100.5, 99.5, 100.0),
        bar_on_day(3, 50.0, 51.0, 49.0, 50.9),
        bar_on_day(4, 50.0, 50.5, 48.0, 49.2),
    ];

    let tally = classify(&bars, CandleTolerances::default());

    assert_eq!(tally.bullish + tally.bearish + tally.doji, bars.len());
    assert_eq!(tally.bullish, 2);
    assert_eq!(tally.bearish, 2);
    assert_eq!(tally.doji, 1);
}

#[test]
fn classification_is_permutation_invariant() {
    let mut bars = vec![
        bar_on_day(0, 100.0, 102.0, 99.0, 101.0),
        bar_on_day(1, 100.0, 101.0, 98.0, 99.0),
        bar_on_day(2, 100.0, 100.5, 99.5, 100.0),
        bar_on_day(3, 10.0, 13.0, 9.0, 12.0),
    ];
    let chronological = classify(&bars, CandleTolerances::default());

    bars.rotate_left(2);
    bars.swap(0, 3);
    let shuffled = classify(&bars, CandleTolerances::default());

    assert_eq!(chronological, shuffled);
}

#[test]
fn tally_serializes_to_scalar_json_integers() {
    let bars = vec![bar_on_day(0, 100.0, 103.0, 99.0, 102.0)];
    let tally = classify(&bars, CandleTolerances::default());

    let value = serde_json::to_value(tally).expect("tally serializes");
    for field in ["bullish", "bearish", "doji", "upper_shadow", "lower_shadow"] {
        assert!(
            value[field].is_u64(),
            "field '{field}' must serialize as a JSON integer, got {:?}",
            value[field]
        );
    }
}

// =============================================================================
// Normalizer: golden cases
// =============================================================================

#[test]
fn normalizer_handles_known_market_conventions() {
    assert_eq!(Ticker::normalize("700 HK").as_str(), "0700.HK");
    assert_eq!(Ticker::normalize("7000 HK").as_str(), "7000.HK");
    assert_eq!(Ticker::normalize("NVDA US").as_str(), "NVDA");
    assert_eq!(Ticker::normalize("AAPL").as_str(), "AAPL");
}

#[test]
fn normalizer_is_total_over_arbitrary_input() {
    assert_eq!(Ticker::normalize("  spy  ").as_str(), "SPY");
    assert_eq!(Ticker::normalize("700 XX").as_str(), "700 XX");
    assert_eq!(Ticker::normalize("one two three").as_str(), "ONE TWO THREE");
    assert_eq!(Ticker::normalize("").as_str(), "");
}

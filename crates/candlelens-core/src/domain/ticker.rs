use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Canonical provider ticker produced from a human-entered symbol.
///
/// Normalization is a total function: input that matches no known market
/// convention is passed through uppercased, never rejected. The two handled
/// conventions follow Yahoo Finance:
///
/// - `"700 HK"` becomes `"0700.HK"` (code zero-padded to 4 characters)
/// - `"NVDA US"` becomes `"NVDA"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Map a raw user symbol to the canonical provider ticker.
    pub fn normalize(raw: &str) -> Self {
        let upper = raw.trim().to_ascii_uppercase();
        let parts: Vec<&str> = upper.split_whitespace().collect();

        if let [code, market] = parts.as_slice() {
            match *market {
                "HK" => return Self(format!("{:0>4}.HK", code)),
                "US" => return Self((*code).to_owned()),
                _ => {}
            }
        }

        Self(upper)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::normalize(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_hong_kong_codes_to_four_digits() {
        assert_eq!(Ticker::normalize("700 HK").as_str(), "0700.HK");
        assert_eq!(Ticker::normalize("5 hk").as_str(), "0005.HK");
    }

    #[test]
    fn never_truncates_long_hong_kong_codes() {
        assert_eq!(Ticker::normalize("7000 HK").as_str(), "7000.HK");
        assert_eq!(Ticker::normalize("12345 HK").as_str(), "12345.HK");
    }

    #[test]
    fn strips_us_market_suffix() {
        assert_eq!(Ticker::normalize("NVDA US").as_str(), "NVDA");
        assert_eq!(Ticker::normalize("nvda us").as_str(), "NVDA");
    }

    #[test]
    fn passes_through_unrecognized_input_uppercased() {
        assert_eq!(Ticker::normalize("AAPL").as_str(), "AAPL");
        assert_eq!(Ticker::normalize("aapl").as_str(), "AAPL");
        assert_eq!(Ticker::normalize("700 JP").as_str(), "700 JP");
        assert_eq!(Ticker::normalize("a b c").as_str(), "A B C");
    }
}

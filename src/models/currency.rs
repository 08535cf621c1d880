use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A currency the dashboard can display amounts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", symbol: "$", name: "US Dollar" },
    Currency { code: "EUR", symbol: "\u{20ac}", name: "Euro" },
    Currency { code: "GBP", symbol: "\u{00a3}", name: "British Pound" },
    Currency { code: "JPY", symbol: "\u{00a5}", name: "Japanese Yen" },
    Currency { code: "CNY", symbol: "\u{00a5}", name: "Chinese Yuan" },
    Currency { code: "HKD", symbol: "HK$", name: "Hong Kong Dollar" },
    Currency { code: "SGD", symbol: "S$", name: "Singapore Dollar" },
    Currency { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    Currency { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    Currency { code: "CHF", symbol: "CHF", name: "Swiss Franc" },
];

/// Base currency all rates are quoted against.
pub const BASE_CURRENCY: &str = "USD";

/// Look up a catalog currency by code, tolerating "USD - US Dollar" style labels.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    let code = normalize_code(code);
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Strip a trailing " - Name" and upper-case the code.
pub fn normalize_code(code: &str) -> String {
    code.split(" - ")
        .next()
        .unwrap_or_default()
        .trim()
        .to_uppercase()
}

/// Exchange rates quoted as units of currency per 1 USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRates {
    pub rates: BTreeMap<String, f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        let rates = [
            ("USD", 1.0),
            ("EUR", 0.92),
            ("GBP", 0.79),
            ("JPY", 149.50),
            ("CNY", 7.24),
            ("HKD", 7.83),
            ("SGD", 1.34),
            ("AUD", 1.53),
            ("CAD", 1.36),
            ("CHF", 0.88),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self {
            rates,
            last_updated: None,
        }
    }
}

impl ExchangeRates {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(&normalize_code(code)).copied()
    }

    /// Convert through USD. An unknown or non-positive rate counts as 1.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> f64 {
        let from = normalize_code(from);
        let to = normalize_code(to);
        if from == to {
            return amount;
        }

        let from_rate = self.usable_rate(&from);
        let to_rate = self.usable_rate(&to);
        amount / from_rate * to_rate
    }

    fn usable_rate(&self, code: &str) -> f64 {
        self.rates
            .get(code)
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(1.0)
    }

    /// Rates never refreshed, or refreshed longer than `max_age` ago, are stale.
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        match self.last_updated {
            Some(updated) => now - updated > max_age,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_currency_with_label() {
        assert_eq!(find_currency("USD - US Dollar").map(|c| c.symbol), Some("$"));
        assert_eq!(find_currency("cny").map(|c| c.symbol), Some("¥"));
        assert!(find_currency("XYZ").is_none());
    }

    #[test]
    fn test_convert_same_currency() {
        let rates = ExchangeRates::default();
        assert_eq!(rates.convert(100.0, "CNY", "cny"), 100.0);
    }

    #[test]
    fn test_convert_through_usd() {
        let rates = ExchangeRates::default();
        let usd = rates.convert(724.0, "CNY", "USD");
        assert!((usd - 100.0).abs() < 1e-9);

        let eur = rates.convert(100.0, "USD", "EUR");
        assert!((eur - 92.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_rate_counts_as_one() {
        let rates = ExchangeRates::default();
        assert!((rates.convert(50.0, "XYZ", "USD") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_staleness() {
        let now = Utc::now();
        let mut rates = ExchangeRates::default();
        assert!(rates.is_stale(now, Duration::hours(24)));

        rates.last_updated = Some(now - Duration::hours(2));
        assert!(!rates.is_stale(now, Duration::hours(24)));

        rates.last_updated = Some(now - Duration::hours(25));
        assert!(rates.is_stale(now, Duration::hours(24)));
    }
}

use std::env;

use crate::models::{find_currency, DisplayOptions, Language, UnitScale};

pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Language used when a request does not name one.
    pub default_language: Language,
    /// Unit preference applied when a request does not name one.
    pub default_unit: Option<UnitScale>,
    /// Display currency applied when a request does not name one.
    pub default_currency: Option<String>,
    pub rates_url: String,
    pub rates_max_age_hours: i64,
    pub refresh_rates_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 7070,
            default_language: Language::Zh,
            default_unit: None,
            default_currency: None,
            rates_url: DEFAULT_RATES_URL.into(),
            rates_max_age_hours: 24,
            refresh_rates_on_start: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let default_language = match env::var("INSIGHTS_LANGUAGE") {
            Ok(v) => Language::from_str(&v).unwrap_or_else(|| {
                tracing::warn!(value = %v, "Unknown INSIGHTS_LANGUAGE, using zh");
                Language::Zh
            }),
            Err(_) => defaults.default_language,
        };

        let default_unit = env::var("INSIGHTS_UNIT").ok().and_then(|v| {
            let unit = UnitScale::from_str(&v);
            if unit.is_none() {
                tracing::warn!(value = %v, "Unknown INSIGHTS_UNIT, following language default");
            }
            unit
        });

        let default_currency = env::var("INSIGHTS_CURRENCY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .and_then(|v| match find_currency(&v) {
                Some(currency) => Some(currency.code.to_string()),
                None => {
                    tracing::warn!(value = %v, "Unsupported INSIGHTS_CURRENCY, not converting");
                    None
                }
            });

        Self {
            host: env::var("INSIGHTS_HOST").unwrap_or(defaults.host),
            port: env::var("INSIGHTS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            default_language,
            default_unit,
            default_currency,
            rates_url: env::var("INSIGHTS_RATES_URL").unwrap_or(defaults.rates_url),
            rates_max_age_hours: env::var("INSIGHTS_RATES_MAX_AGE_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .filter(|h: &i64| *h > 0)
                .unwrap_or(defaults.rates_max_age_hours),
            refresh_rates_on_start: env::var("INSIGHTS_REFRESH_RATES_ON_START")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.refresh_rates_on_start),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fill request-level gaps with the configured defaults.
    pub fn display_options(
        &self,
        language: Option<Language>,
        currency: Option<String>,
        unit: Option<UnitScale>,
    ) -> DisplayOptions {
        DisplayOptions {
            language: language.unwrap_or(self.default_language),
            currency: currency
                .filter(|c| !c.trim().is_empty())
                .or_else(|| self.default_currency.clone()),
            unit: unit.or(self.default_unit),
        }
    }

    pub fn rates_max_age(&self) -> chrono::Duration {
        chrono::Duration::hours(self.rates_max_age_hours)
    }
}

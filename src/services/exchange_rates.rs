use crate::error::{AppError, AppResult};
use crate::models::{ExchangeRates, BASE_CURRENCY, CURRENCIES};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::{debug, info, warn};

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Shape of the exchangerate-api.com `latest` payload (other fields ignored).
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

fn create_client() -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Fetch current USD-based rates from `url`.
pub async fn fetch_latest_rates(url: &str) -> AppResult<ExchangeRates> {
    debug!(url = %url, "Fetching exchange rates");

    let client = create_client()?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "Exchange rate provider returned {}",
            response.status()
        )));
    }

    let body = response.text().await?;
    let rates = parse_rates_response(&body, Utc::now())?;
    info!(currencies = rates.rates.len(), "Fetched exchange rates");
    Ok(rates)
}

/// Keep only catalog currencies and pin the base currency to 1.
pub fn parse_rates_response(body: &str, fetched_at: DateTime<Utc>) -> AppResult<ExchangeRates> {
    let parsed: LatestRatesResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Upstream(format!("Invalid exchange rate payload: {}", e)))?;

    let mut rates = BTreeMap::new();
    rates.insert(BASE_CURRENCY.to_string(), 1.0);

    for currency in CURRENCIES {
        if currency.code == BASE_CURRENCY {
            continue;
        }
        match parsed.rates.get(currency.code) {
            Some(rate) if rate.is_finite() && *rate > 0.0 => {
                rates.insert(currency.code.to_string(), *rate);
            }
            Some(rate) => {
                warn!(currency = currency.code, rate = rate, "Ignoring invalid exchange rate");
            }
            None => {
                debug!(currency = currency.code, "Provider has no rate for currency");
            }
        }
    }

    Ok(ExchangeRates {
        rates,
        last_updated: Some(fetched_at),
    })
}

/// Merge freshly fetched rates over the cached ones so currencies the provider
/// skipped keep their previous value.
pub fn merge_rates(cached: &ExchangeRates, fresh: ExchangeRates) -> ExchangeRates {
    let mut rates = cached.rates.clone();
    rates.extend(fresh.rates);
    ExchangeRates {
        rates,
        last_updated: fresh.last_updated.or(cached.last_updated),
    }
}

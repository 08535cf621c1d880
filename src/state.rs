use crate::config::Config;
use crate::error::AppResult;
use crate::models::ExchangeRates;
use crate::services::exchange_rates::{fetch_latest_rates, merge_rates};
use chrono::Utc;
use std::sync::{Arc, Mutex, RwLock};

/// State for tracking exchange rate refresh operations.
///
/// Refreshes may overlap (startup task plus a manual trigger), so in-flight
/// fetches are counted rather than flagged.
#[derive(Clone, Debug, Default)]
pub struct RateRefreshState {
    pub in_flight: usize,
    pub last_error: Option<String>,
}

impl RateRefreshState {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    pub fn finish(&mut self, error: Option<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_error = error;
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub rates: Arc<RwLock<ExchangeRates>>,
    pub rate_refresh: Arc<Mutex<RateRefreshState>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            rates: Arc::new(RwLock::new(ExchangeRates::default())),
            rate_refresh: Arc::new(Mutex::new(RateRefreshState::default())),
        }
    }

    /// Snapshot of the current rates. A poisoned lock falls back to built-in rates.
    pub fn current_rates(&self) -> ExchangeRates {
        self.rates
            .read()
            .map(|r| r.clone())
            .unwrap_or_else(|_| ExchangeRates::default())
    }

    pub fn rates_are_stale(&self) -> bool {
        self.current_rates()
            .is_stale(Utc::now(), self.config.rates_max_age())
    }

    /// Fetch fresh rates and store them. On failure the cached rates stay in effect.
    pub async fn refresh_rates(&self) -> AppResult<ExchangeRates> {
        if let Ok(mut refresh) = self.rate_refresh.lock() {
            refresh.begin();
        }

        let result = fetch_latest_rates(&self.config.rates_url).await;

        let outcome = match result {
            Ok(fresh) => {
                let merged = merge_rates(&self.current_rates(), fresh);
                if let Ok(mut rates) = self.rates.write() {
                    *rates = merged.clone();
                }
                Ok(merged)
            }
            Err(e) => {
                tracing::warn!("Exchange rate refresh failed, keeping cached rates: {}", e);
                Err(e)
            }
        };

        if let Ok(mut refresh) = self.rate_refresh.lock() {
            refresh.finish(outcome.as_ref().err().map(|e| e.to_string()));
        }

        outcome
    }

    pub fn refresh_status(&self) -> RateRefreshState {
        self.rate_refresh
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

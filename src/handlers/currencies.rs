use axum::extract::State;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{ExchangeRates, CURRENCIES};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CurrencyRate {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub rate: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CurrencyCatalog {
    pub base: &'static str,
    pub currencies: Vec<CurrencyRate>,
    pub last_updated: Option<DateTime<Utc>>,
    pub stale: bool,
    pub is_refreshing: bool,
    pub last_error: Option<String>,
}

fn catalog(state: &AppState, rates: &ExchangeRates) -> CurrencyCatalog {
    let refresh = state.refresh_status();

    CurrencyCatalog {
        base: crate::models::BASE_CURRENCY,
        currencies: CURRENCIES
            .iter()
            .map(|c| CurrencyRate {
                code: c.code,
                symbol: c.symbol,
                name: c.name,
                rate: rates.rate(c.code),
            })
            .collect(),
        last_updated: rates.last_updated,
        stale: rates.is_stale(Utc::now(), state.config.rates_max_age()),
        is_refreshing: refresh.is_refreshing(),
        last_error: refresh.last_error,
    }
}

pub async fn index(State(state): State<AppState>) -> Json<CurrencyCatalog> {
    let rates = state.current_rates();
    Json(catalog(&state, &rates))
}

pub async fn refresh(State(state): State<AppState>) -> AppResult<Json<CurrencyCatalog>> {
    let rates = state.refresh_rates().await?;
    Ok(Json(catalog(&state, &rates)))
}

pub mod currencies;
pub mod financials;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Financial panel (JSON for the summary, table and charts)
        .route("/api/financials/normalize", post(financials::normalize))
        .route("/api/financials/placeholder", get(financials::placeholder))
        // Currency catalog and exchange rates
        .route("/api/currencies", get(currencies::index))
        .route("/api/currencies/refresh", post(currencies::refresh))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

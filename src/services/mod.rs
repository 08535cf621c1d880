pub mod exchange_rates;
pub mod financials;
pub mod placeholder;

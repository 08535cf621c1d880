use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{CustomerFinancials, Language, NormalizedFinancials, UnitScale};
use crate::services::financials::normalize_financials;
use crate::services::placeholder::byd_financials;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub customer: CustomerFinancials,
    pub language: Option<Language>,
    pub currency: Option<String>,
    pub unit: Option<UnitScale>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayParams {
    pub language: Option<String>,
    pub currency: Option<String>,
    pub unit: Option<String>,
}

impl DisplayParams {
    fn language(&self) -> AppResult<Option<Language>> {
        self.language
            .as_deref()
            .map(|s| {
                Language::from_str(s)
                    .ok_or_else(|| AppError::Validation(format!("Unsupported language: {}", s)))
            })
            .transpose()
    }

    fn unit(&self) -> AppResult<Option<UnitScale>> {
        self.unit
            .as_deref()
            .map(|s| {
                UnitScale::from_str(s)
                    .ok_or_else(|| AppError::Validation(format!("Unsupported unit: {}", s)))
            })
            .transpose()
    }
}

pub async fn normalize(
    State(state): State<AppState>,
    payload: Result<Json<NormalizeRequest>, JsonRejection>,
) -> AppResult<Json<NormalizedFinancials>> {
    let Json(request) = payload?;

    let options = state
        .config
        .display_options(request.language, request.currency, request.unit);
    let rates = state.current_rates();

    tracing::debug!(
        language = options.language.as_str(),
        unit = options.unit().as_str(),
        currency = ?options.currency,
        "Normalizing customer financials"
    );

    Ok(Json(normalize_financials(&request.customer, &options, &rates)))
}

pub async fn placeholder(
    State(state): State<AppState>,
    params: Result<Query<DisplayParams>, QueryRejection>,
) -> AppResult<Json<NormalizedFinancials>> {
    let Query(params) = params?;

    let options =
        state
            .config
            .display_options(params.language()?, params.currency.clone(), params.unit()?);

    let customer = CustomerFinancials::Placeholder {
        financials: Some(byd_financials()),
    };

    Ok(Json(normalize_financials(
        &customer,
        &options,
        &state.current_rates(),
    )))
}

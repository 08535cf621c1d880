//! Integration tests for the financial panel JSON API.

mod common;

use axum::http::StatusCode;
use common::TestClient;
use customer_insights::models::{Language, NormalizedFinancials};
use serde_json::{json, Value};

fn byd_statements() -> Value {
    json!([
        {
            "statement_id": "fs-2023",
            "customer_id": "byd",
            "fiscal_year": 2023,
            "revenue": "602300000000.00",
            "net_profit": "30000000000.00",
            "roe": 0.151,
            "debt_ratio": 0.548,
            "currency_code": "CNY",
            "currency_symbol": "¥"
        },
        {
            "statement_id": "fs-2024",
            "customer_id": "byd",
            "fiscal_year": "2024",
            "revenue": 777700000000.0,
            "net_profit": 40200000000.0,
            "roe": 0.155,
            "debt_ratio": 0.554,
            "currency_code": "CNY",
            "currency_symbol": "¥"
        },
        {
            "statement_id": "fs-2022",
            "customer_id": "byd",
            "fiscal_year": 2022,
            "revenue": null,
            "net_profit": 16600000000.0,
            "roe": null,
            "debt_ratio": 0.753,
            "currency_code": "CNY",
            "currency_symbol": "¥"
        }
    ])
}

/// Database-backed customer in Chinese: summary is the latest year, table descends, trends ascend.
#[tokio::test]
async fn test_normalize_database_customer_zh() {
    let client = TestClient::new();

    let (status, parsed): (_, Option<NormalizedFinancials>) = client
        .post_json(
            "/api/financials/normalize",
            &json!({
                "customer": { "kind": "database_backed", "statements": byd_statements() },
                "language": "zh"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = parsed.expect("Failed to parse normalized financials");

    assert_eq!(data.summary.revenue, "¥7777亿");
    assert_eq!(data.summary.profit, "¥402亿");
    assert_eq!(data.summary.roe, "15.5%");
    assert_eq!(data.summary.debt_ratio, "55.4%");
    assert_eq!(data.summary.fiscal_year, Some(2024));

    let years: Vec<String> = data.annual_data.iter().map(|r| r.year.to_string()).collect();
    assert_eq!(years, vec!["2024", "2023", "2022"]);
    assert_eq!(data.annual_data[2].revenue, "N/A");
    assert_eq!(data.annual_data[2].roe, "N/A");
    assert_eq!(data.annual_data[2].debt_ratio, "75.3%");

    let trend: Vec<&str> = data
        .revenue_profit_trend
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(trend, vec!["2022", "2023", "2024"]);
    assert_eq!(data.revenue_profit_trend[0].revenue, 0.0);

    assert!(data.revenue_scale_max >= 10.0);
    assert!(data.revenue_scale_max >= 7777.0 * 1.2);
    assert!(data.roe_scale_max >= 75.3 * 1.2);
    assert_eq!(data.revenue_unit_label, "亿");
}

/// The raw JSON uses the camelCase output contract.
#[tokio::test]
async fn test_normalize_output_field_names() {
    let client = TestClient::new();

    let (status, body) = client
        .post_json_raw(
            "/api/financials/normalize",
            &json!({
                "customer": { "kind": "database_backed", "statements": byd_statements() },
                "language": "en"
            })
            .to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    for key in [
        "summary",
        "annualData",
        "revenueProfitTrend",
        "roeDebtTrend",
        "revenueScaleMax",
        "roeScaleMax",
        "revenueUnitLabel",
    ] {
        assert!(value.get(key).is_some(), "missing field {}", key);
    }
    assert_eq!(value["summary"]["fiscalYear"], 2024);
    assert_eq!(value["summary"]["currencySymbol"], "¥");
    assert_eq!(value["annualData"][0]["financial_statement_id"], "fs-2024");
    assert_eq!(value["roeDebtTrend"][0]["name"], "2022");
    assert!(value["roeDebtTrend"][0].get("debtRatio").is_some());
}

/// English language without explicit unit uses billions with one decimal.
#[tokio::test]
async fn test_normalize_english_billions() {
    let client = TestClient::with_language(Language::En);

    let (status, parsed): (_, Option<NormalizedFinancials>) = client
        .post_json(
            "/api/financials/normalize",
            &json!({
                "customer": {
                    "kind": "database_backed",
                    "statements": [{
                        "statement_id": "s1",
                        "fiscal_year": 2023,
                        "revenue": 500000000000i64,
                        "net_profit": 50000000000i64,
                        "roe": 0.12,
                        "debt_ratio": 0.45
                    }]
                }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = parsed.unwrap();
    assert_eq!(data.summary.revenue, "$500.0B");
    assert_eq!(data.summary.profit, "$50.0B");
    assert_eq!(data.summary.roe, "12.0%");
    assert_eq!(data.summary.debt_ratio, "45.0%");
    assert_eq!(data.revenue_unit_label, "billion");
}

/// Converting CNY statements to USD with an explicit million unit.
#[tokio::test]
async fn test_normalize_with_currency_and_unit() {
    let client = TestClient::new();

    let (status, parsed): (_, Option<NormalizedFinancials>) = client
        .post_json(
            "/api/financials/normalize",
            &json!({
                "customer": {
                    "kind": "database_backed",
                    "statements": [{
                        "statement_id": "s1",
                        "fiscal_year": 2024,
                        "revenue": 7240000000i64,
                        "currency_code": "CNY",
                        "currency_symbol": "¥"
                    }]
                },
                "language": "en",
                "currency": "USD",
                "unit": "million"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = parsed.unwrap();
    assert_eq!(data.summary.revenue, "$1000.0M");
    assert_eq!(data.summary.currency_symbol.as_deref(), Some("$"));
    assert_eq!(data.summary.profit, "N/A");
    assert_eq!(data.revenue_unit_label, "million");
}

/// A customer with no statements and no legacy data renders all N/A.
#[tokio::test]
async fn test_normalize_empty_customer() {
    let client = TestClient::new();

    let (status, parsed): (_, Option<NormalizedFinancials>) = client
        .post_json(
            "/api/financials/normalize",
            &json!({ "customer": { "kind": "database_backed", "statements": [] } }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = parsed.unwrap();
    assert_eq!(data.summary.revenue, "N/A");
    assert_eq!(data.summary.profit, "N/A");
    assert_eq!(data.summary.roe, "N/A");
    assert_eq!(data.summary.debt_ratio, "N/A");
    assert!(data.revenue_profit_trend.is_empty());
    assert!(data.roe_debt_trend.is_empty());
    assert_eq!(data.revenue_scale_max, 10.0);
    assert_eq!(data.roe_scale_max, 10.0);
}

/// Non-numeric fiscal years are rejected at the boundary.
#[tokio::test]
async fn test_normalize_rejects_non_numeric_year() {
    let client = TestClient::new();

    let (status, body) = client
        .post_json_raw(
            "/api/financials/normalize",
            &json!({
                "customer": {
                    "kind": "database_backed",
                    "statements": [{ "statement_id": "s1", "fiscal_year": "FY2023" }]
                }
            })
            .to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert!(value["error"].is_string());
}

/// Malformed JSON is a validation error, not a server error.
#[tokio::test]
async fn test_normalize_rejects_malformed_body() {
    let client = TestClient::new();
    let (status, _) = client
        .post_json_raw("/api/financials/normalize", "{not json")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// The placeholder endpoint serves the static BYD block.
#[tokio::test]
async fn test_placeholder_endpoint() {
    let client = TestClient::new();

    let (status, parsed): (_, Option<NormalizedFinancials>) = client
        .get_json("/api/financials/placeholder?language=en")
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = parsed.unwrap();
    assert_eq!(data.summary.revenue, "¥7777亿");
    assert_eq!(data.summary.fiscal_year, None);
    assert_eq!(data.annual_data.len(), 2);
    assert_eq!(data.revenue_profit_trend.len(), 3);
    assert_eq!(data.revenue_unit_label, "hundred million");
}

/// Unknown query values are rejected.
#[tokio::test]
async fn test_placeholder_rejects_unknown_unit() {
    let client = TestClient::new();
    let (status, _) = client
        .get("/api/financials/placeholder?unit=trillion")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

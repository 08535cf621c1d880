use serde::{Deserialize, Serialize};
use std::fmt;

use super::display::UnitScale;
use super::financial_statement::FinancialStatement;

/// Placeholder text for unknown figures.
pub const NOT_AVAILABLE: &str = "N/A";

/// Headline figures for the most recent year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub revenue: String,
    pub profit: String,
    pub roe: String,
    pub debt_ratio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl FinancialSummary {
    pub fn not_available() -> Self {
        Self {
            revenue: NOT_AVAILABLE.into(),
            profit: NOT_AVAILABLE.into(),
            roe: NOT_AVAILABLE.into(),
            debt_ratio: NOT_AVAILABLE.into(),
            fiscal_year: None,
            currency_symbol: None,
        }
    }
}

/// Year column of the annual table: numeric for statements, free text for legacy rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearLabel {
    Numeric(i32),
    Text(String),
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(year) => write!(f, "{}", year),
            Self::Text(label) => f.write_str(label),
        }
    }
}

/// One display-formatted row of the annual table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualRow {
    #[serde(
        rename = "financial_statement_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub financial_statement_id: Option<String>,
    pub year: YearLabel,
    pub revenue: String,
    pub profit: String,
    pub roe: String,
    pub debt_ratio: String,
}

/// Point on the revenue/profit chart, amounts already scaled to display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueProfitPoint {
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
}

/// Point on the ROE/debt chart, in percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoeDebtPoint {
    pub name: String,
    pub roe: f64,
    pub debt_ratio: f64,
}

/// Everything the financial panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFinancials {
    pub summary: FinancialSummary,
    pub annual_data: Vec<AnnualRow>,
    pub revenue_profit_trend: Vec<RevenueProfitPoint>,
    pub roe_debt_trend: Vec<RoeDebtPoint>,
    pub revenue_scale_max: f64,
    pub roe_scale_max: f64,
    pub revenue_unit_label: String,
}

/// Legacy annual row with magnitudes already in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyAnnualRow {
    pub year: String,
    pub revenue: f64,
    pub profit: f64,
    pub roe: f64,
    pub debt_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyTrendData {
    #[serde(default)]
    pub revenue_and_profit: Vec<RevenueProfitPoint>,
    #[serde(default)]
    pub roe_and_debt: Vec<RoeDebtPoint>,
}

/// Static financial block attached to placeholder customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyFinancials {
    pub revenue: String,
    pub profit: String,
    pub roe: String,
    pub debt_ratio: String,
    /// Unit the pre-scaled figures below are expressed in.
    #[serde(default = "legacy_unit")]
    pub unit: UnitScale,
    #[serde(default)]
    pub annual_data: Vec<LegacyAnnualRow>,
    #[serde(default)]
    pub trend_data: LegacyTrendData,
}

fn legacy_unit() -> UnitScale {
    UnitScale::HundredMillion
}

/// Where a customer's financials come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomerFinancials {
    /// Built-in demo customer; only static data exists.
    Placeholder {
        #[serde(default)]
        financials: Option<LegacyFinancials>,
    },
    /// Customer stored in the CRM database with its statement rows.
    DatabaseBacked {
        #[serde(default)]
        statements: Vec<FinancialStatement>,
        #[serde(default)]
        financials: Option<LegacyFinancials>,
    },
}

impl CustomerFinancials {
    /// Build from the loose shape the dashboard page works with.
    pub fn from_parts(
        is_database_backed: bool,
        statements: Vec<FinancialStatement>,
        financials: Option<LegacyFinancials>,
    ) -> Self {
        if is_database_backed {
            Self::DatabaseBacked {
                statements,
                financials,
            }
        } else {
            Self::Placeholder { financials }
        }
    }

    pub fn legacy(&self) -> Option<&LegacyFinancials> {
        match self {
            Self::Placeholder { financials } | Self::DatabaseBacked { financials, .. } => {
                financials.as_ref()
            }
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::serde_utils::{deserialize_id, deserialize_lenient_f64, YearVisitor};

/// Fiscal year of a statement. Always numeric once past the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FiscalYear(pub i32);

impl FiscalYear {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for FiscalYear {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl<'de> Deserialize<'de> for FiscalYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(YearVisitor).map(FiscalYear)
    }
}

/// A per-year financial statement row as returned by the CRM API.
///
/// Monetary fields are in the statement currency's base unit; `roe` and
/// `debt_ratio` are decimal fractions (0.15 means 15%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    #[serde(deserialize_with = "deserialize_id")]
    pub statement_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub fiscal_year: FiscalYear,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub net_profit: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub roe: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub debt_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl FinancialStatement {
    /// Statement with only id and year set; handy for building rows field by field.
    pub fn new(statement_id: impl Into<String>, fiscal_year: i32) -> Self {
        Self {
            statement_id: statement_id.into(),
            customer_id: None,
            fiscal_year: fiscal_year.into(),
            revenue: None,
            net_profit: None,
            roe: None,
            debt_ratio: None,
            currency_symbol: None,
            currency_code: None,
        }
    }
}

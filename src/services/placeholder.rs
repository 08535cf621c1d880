//! Static financials shown for the built-in demo customer.

use crate::models::{
    LegacyAnnualRow, LegacyFinancials, LegacyTrendData, RevenueProfitPoint, RoeDebtPoint,
    UnitScale,
};

/// Display-unit figures for BYD (hundred-million CNY), as shown before any
/// statements were loaded into the database.
pub fn byd_financials() -> LegacyFinancials {
    LegacyFinancials {
        revenue: "\u{00a5}7777\u{4ebf}".into(),
        profit: "402\u{4ebf}".into(),
        roe: "15.5%".into(),
        debt_ratio: "55.4%".into(),
        unit: UnitScale::HundredMillion,
        annual_data: vec![
            annual("2023", 6023.0, 300.0, 15.1, 54.8),
            annual("2024", 7777.0, 402.0, 15.5, 55.4),
        ],
        trend_data: LegacyTrendData {
            revenue_and_profit: vec![
                revenue_point("2023.0", 6023.0, 300.0),
                revenue_point("2023.5", 6800.0, 340.0),
                revenue_point("2024.0", 7777.0, 402.0),
            ],
            roe_and_debt: vec![
                roe_point("2023.0", 15.1, 54.8),
                roe_point("2023.5", 15.3, 55.0),
                roe_point("2024.0", 15.5, 55.4),
            ],
        },
    }
}

fn annual(year: &str, revenue: f64, profit: f64, roe: f64, debt_ratio: f64) -> LegacyAnnualRow {
    LegacyAnnualRow {
        year: year.into(),
        revenue,
        profit,
        roe,
        debt_ratio,
    }
}

fn revenue_point(name: &str, revenue: f64, profit: f64) -> RevenueProfitPoint {
    RevenueProfitPoint {
        name: name.into(),
        revenue,
        profit,
    }
}

fn roe_point(name: &str, roe: f64, debt_ratio: f64) -> RoeDebtPoint {
    RoeDebtPoint {
        name: name.into(),
        roe,
        debt_ratio,
    }
}

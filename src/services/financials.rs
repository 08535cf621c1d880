//! Derives the financial panel (summary, annual table, trend charts) from
//! per-year statements.

use crate::formatting::{axis_max, format_plain_number, format_ratio_percent, format_scaled_money};
use crate::models::{
    find_currency, AnnualRow, Currency, CustomerFinancials, DisplayOptions, ExchangeRates,
    FinancialStatement, FinancialSummary, LegacyFinancials, NormalizedFinancials,
    RevenueProfitPoint, RoeDebtPoint, UnitScale, YearLabel,
};
use crate::sort_utils::{order_by_fiscal_year, SortDirection};

/// Resolves symbol and conversion factor for each statement.
struct MoneyContext<'a> {
    options: &'a DisplayOptions,
    rates: &'a ExchangeRates,
    target: Option<&'static Currency>,
}

impl<'a> MoneyContext<'a> {
    fn new(options: &'a DisplayOptions, rates: &'a ExchangeRates) -> Self {
        let target = options.currency.as_deref().and_then(|code| {
            let found = find_currency(code);
            if found.is_none() {
                tracing::warn!(currency = %code, "Unsupported display currency, not converting");
            }
            found
        });

        Self {
            options,
            rates,
            target,
        }
    }

    /// Symbol and multiplier applied to the statement's monetary fields.
    fn resolve(&self, statement: &FinancialStatement) -> (String, f64) {
        if let (Some(target), Some(from)) = (self.target, statement.currency_code.as_deref()) {
            return (
                target.symbol.to_string(),
                self.rates.convert(1.0, from, target.code),
            );
        }

        let symbol = statement
            .currency_symbol
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.options.language.default_currency_symbol());
        (symbol.to_string(), 1.0)
    }

    fn money(&self, value: Option<f64>, symbol: &str, factor: f64) -> String {
        format_scaled_money(
            value.map(|v| v * factor),
            symbol,
            self.options.unit(),
            self.options.language,
        )
    }

    fn scaled(&self, value: Option<f64>, factor: f64) -> f64 {
        value
            .filter(|v| v.is_finite())
            .map(|v| v * factor / self.options.unit().divider())
            .unwrap_or(0.0)
    }
}

/// Normalize a customer's financials for display.
///
/// Database-backed customers with at least one statement are derived from the
/// statements; everyone else falls back to the static legacy block, and to
/// "N/A" with empty charts when there is none.
pub fn normalize_financials(
    customer: &CustomerFinancials,
    options: &DisplayOptions,
    rates: &ExchangeRates,
) -> NormalizedFinancials {
    match customer {
        CustomerFinancials::DatabaseBacked { statements, .. } if !statements.is_empty() => {
            from_statements(statements, options, rates)
        }
        _ => from_legacy(customer.legacy(), options),
    }
}

/// Derive the panel from statement rows. `statements` must not be empty for a
/// meaningful summary; an empty slice yields the "N/A" bundle.
pub fn from_statements(
    statements: &[FinancialStatement],
    options: &DisplayOptions,
    rates: &ExchangeRates,
) -> NormalizedFinancials {
    let ctx = MoneyContext::new(options, rates);
    let descending = order_by_fiscal_year(statements, SortDirection::Desc);

    let Some(latest) = descending.first() else {
        return from_legacy(None, options);
    };

    let (latest_symbol, latest_factor) = ctx.resolve(latest);
    let summary = FinancialSummary {
        revenue: ctx.money(latest.revenue, &latest_symbol, latest_factor),
        profit: ctx.money(latest.net_profit, &latest_symbol, latest_factor),
        roe: format_ratio_percent(latest.roe),
        debt_ratio: format_ratio_percent(latest.debt_ratio),
        fiscal_year: Some(latest.fiscal_year.value()),
        currency_symbol: Some(latest_symbol),
    };

    let annual_data: Vec<AnnualRow> = descending
        .iter()
        .map(|statement| {
            let (symbol, factor) = ctx.resolve(statement);
            AnnualRow {
                financial_statement_id: Some(statement.statement_id.clone()),
                year: YearLabel::Numeric(statement.fiscal_year.value()),
                revenue: ctx.money(statement.revenue, &symbol, factor),
                profit: ctx.money(statement.net_profit, &symbol, factor),
                roe: format_ratio_percent(statement.roe),
                debt_ratio: format_ratio_percent(statement.debt_ratio),
            }
        })
        .collect();

    let ascending: Vec<&FinancialStatement> = descending.iter().rev().copied().collect();

    let revenue_profit_trend: Vec<RevenueProfitPoint> = ascending
        .iter()
        .map(|statement| {
            let (_, factor) = ctx.resolve(statement);
            RevenueProfitPoint {
                name: statement.fiscal_year.to_string(),
                revenue: ctx.scaled(statement.revenue, factor),
                profit: ctx.scaled(statement.net_profit, factor),
            }
        })
        .collect();

    let roe_debt_trend: Vec<RoeDebtPoint> = ascending
        .iter()
        .map(|statement| RoeDebtPoint {
            name: statement.fiscal_year.to_string(),
            roe: percentage_points(statement.roe),
            debt_ratio: percentage_points(statement.debt_ratio),
        })
        .collect();

    tracing::debug!(
        statements = statements.len(),
        years = annual_data.len(),
        latest_year = %latest.fiscal_year,
        "Normalized financial statements"
    );

    finish(
        summary,
        annual_data,
        revenue_profit_trend,
        roe_debt_trend,
        options.unit(),
        options,
    )
}

/// Build the panel from static legacy data, or the empty bundle when absent.
pub fn from_legacy(
    legacy: Option<&LegacyFinancials>,
    options: &DisplayOptions,
) -> NormalizedFinancials {
    let Some(legacy) = legacy else {
        return finish(
            FinancialSummary::not_available(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            options.unit(),
            options,
        );
    };

    let summary = FinancialSummary {
        revenue: legacy.revenue.clone(),
        profit: legacy.profit.clone(),
        roe: legacy.roe.clone(),
        debt_ratio: legacy.debt_ratio.clone(),
        fiscal_year: None,
        currency_symbol: None,
    };

    let annual_data = legacy
        .annual_data
        .iter()
        .map(|row| AnnualRow {
            financial_statement_id: None,
            year: YearLabel::Text(row.year.clone()),
            revenue: format_plain_number(row.revenue),
            profit: format_plain_number(row.profit),
            roe: format_plain_number(row.roe),
            debt_ratio: format_plain_number(row.debt_ratio),
        })
        .collect();

    finish(
        summary,
        annual_data,
        legacy.trend_data.revenue_and_profit.clone(),
        legacy.trend_data.roe_and_debt.clone(),
        legacy.unit,
        options,
    )
}

fn percentage_points(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).map(|v| v * 100.0).unwrap_or(0.0)
}

fn finish(
    summary: FinancialSummary,
    annual_data: Vec<AnnualRow>,
    revenue_profit_trend: Vec<RevenueProfitPoint>,
    roe_debt_trend: Vec<RoeDebtPoint>,
    unit: UnitScale,
    options: &DisplayOptions,
) -> NormalizedFinancials {
    let revenue_scale_max = axis_max(
        revenue_profit_trend
            .iter()
            .flat_map(|p| [p.revenue, p.profit]),
    );
    let roe_scale_max = axis_max(roe_debt_trend.iter().flat_map(|p| [p.roe, p.debt_ratio]));

    NormalizedFinancials {
        summary,
        annual_data,
        revenue_profit_trend,
        roe_debt_trend,
        revenue_scale_max,
        roe_scale_max,
        revenue_unit_label: unit.label(options.language).to_string(),
    }
}

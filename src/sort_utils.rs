use std::collections::BTreeMap;

use crate::models::{FinancialStatement, FiscalYear};

/// Sort direction for year-keyed series.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

/// Order statements by fiscal year, one statement per year.
///
/// When several statements share a year the one later in input order wins.
pub fn order_by_fiscal_year(
    statements: &[FinancialStatement],
    direction: SortDirection,
) -> Vec<&FinancialStatement> {
    let mut by_year: BTreeMap<FiscalYear, &FinancialStatement> = BTreeMap::new();

    for statement in statements {
        if let Some(replaced) = by_year.insert(statement.fiscal_year, statement) {
            tracing::debug!(
                fiscal_year = %statement.fiscal_year,
                dropped = %replaced.statement_id,
                kept = %statement.statement_id,
                "Duplicate fiscal year, keeping later statement"
            );
        }
    }

    match direction {
        SortDirection::Asc => by_year.into_values().collect(),
        SortDirection::Desc => by_year.into_values().rev().collect(),
    }
}

pub mod currency;
pub mod display;
pub mod financial_statement;
pub mod financials;

pub use currency::{find_currency, Currency, ExchangeRates, BASE_CURRENCY, CURRENCIES};
pub use display::{DisplayOptions, Language, UnitScale};
pub use financial_statement::{FinancialStatement, FiscalYear};
pub use financials::{
    AnnualRow, CustomerFinancials, FinancialSummary, LegacyAnnualRow, LegacyFinancials,
    LegacyTrendData, NormalizedFinancials, RevenueProfitPoint, RoeDebtPoint, YearLabel,
    NOT_AVAILABLE,
};

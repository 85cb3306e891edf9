pub mod analytics;
mod engine;
pub mod error;
pub mod ledger;

pub use analytics::category::{Classification, ExpenseCategory, Frequency, WorthCategory};
pub use analytics::date::{QuarterKey, YearMonth};
pub use analytics::types::{
    CategoryAmount, ClassificationRatios, Coverage, MonthRef, NameTotal, OverallTotals,
    PeriodBucket, QuarterWorth, RangeSeries, WeekdayRow, WorthAmount,
};
pub use engine::{Engine, LoadedEngine};
pub use error::{EngineError, EngineResult};
pub use ledger::store::StoreOptions;
pub use ledger::types::{LedgerCount, LedgerKind, LedgerRows, LoadReport, RowIssue, SourceRow};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

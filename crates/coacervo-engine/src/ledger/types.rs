use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::analytics::category::{ExpenseCategory, WorthCategory};
use crate::analytics::date::{QuarterKey, YearMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Expenses,
    Income,
    Budget,
    Worth,
}

impl LedgerKind {
    pub const ALL: [Self; 4] = [Self::Expenses, Self::Income, Self::Budget, Self::Worth];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Income => "income",
            Self::Budget => "budget",
            Self::Worth => "worth",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Expenses => "expenses.csv",
            Self::Income => "income.csv",
            Self::Budget => "budget.csv",
            Self::Worth => "worth.csv",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceRow {
    pub row: i64,
    pub name: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LedgerRows {
    pub expenses: Vec<SourceRow>,
    pub income: Vec<SourceRow>,
    pub budget: Vec<SourceRow>,
    pub worth: Vec<SourceRow>,
}

#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    pub name: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub month: YearMonth,
    pub weekday: Weekday,
}

impl ExpenseRecord {
    pub fn new(name: String, amount: f64, category: ExpenseCategory, date: NaiveDate) -> Self {
        Self {
            name,
            amount,
            category,
            date,
            month: YearMonth::of(date),
            weekday: date.weekday(),
        }
    }

    pub fn first_of_month(&self) -> NaiveDate {
        self.month.first_day()
    }
}

#[derive(Debug, Clone)]
pub struct CashflowRecord {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub month: YearMonth,
}

impl CashflowRecord {
    pub fn new(name: String, amount: f64, date: NaiveDate) -> Self {
        Self {
            name,
            amount,
            date,
            month: YearMonth::of(date),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorthRecord {
    pub amount: f64,
    pub category: WorthCategory,
    pub date: NaiveDate,
    pub quarter: QuarterKey,
}

impl WorthRecord {
    pub fn new(amount: f64, category: WorthCategory, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
            quarter: QuarterKey::of(date),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RowIssue {
    pub ledger: LedgerKind,
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    pub expected: Option<String>,
    pub received: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LedgerCount {
    pub ledger: LedgerKind,
    pub rows_read: i64,
    pub rows_loaded: i64,
    pub rows_skipped: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub counts: Vec<LedgerCount>,
    pub issues: Vec<RowIssue>,
}

impl LoadReport {
    pub fn rows_skipped(&self) -> i64 {
        self.counts.iter().map(|count| count.rows_skipped).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

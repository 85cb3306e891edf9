use serde::Serialize;

use crate::analytics::category::{ExpenseCategory, Frequency, WorthCategory};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryAmount {
    pub category: ExpenseCategory,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodBucket {
    pub label: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    pub expense_total: f64,
    pub income_total: f64,
    pub income_to_date: f64,
    pub budget_total: f64,
    pub cumulative_surplus: f64,
    pub expense_by_category: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeSeries {
    pub frequency: Frequency,
    pub buckets: Vec<PeriodBucket>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassificationRatios {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameTotal {
    pub name: String,
    pub category: ExpenseCategory,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekdayRow {
    pub weekday: String,
    pub total: f64,
    pub by_category: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverallTotals {
    pub income_total: f64,
    pub expense_total: f64,
    pub spend_total: f64,
    pub saved_total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorthAmount {
    pub category: WorthCategory,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuarterWorth {
    pub year: i32,
    pub quarter: u32,
    pub label: String,
    pub by_category: Vec<WorthAmount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub years: Vec<i32>,
    pub months: Vec<MonthRef>,
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

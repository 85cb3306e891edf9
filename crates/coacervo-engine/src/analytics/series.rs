use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::analytics::category::{ExpenseCategory, Frequency};
use crate::analytics::date::{YearMonth, round_money};
use crate::analytics::group::{sum_into, zero_fill};
use crate::analytics::types::{CategoryAmount, PeriodBucket, RangeSeries};
use crate::engine::{Engine, MonthTotals};
use crate::{EngineError, EngineResult};

pub(crate) fn range_series(
    engine: &Engine,
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
) -> EngineResult<RangeSeries> {
    match frequency {
        Frequency::Monthly => Ok(monthly_series(engine, start, end)),
        Frequency::Yearly => Ok(yearly_series(engine, start, end)),
        Frequency::Weekly => Err(EngineError::unsupported_frequency(frequency.as_str())),
    }
}

fn monthly_series(engine: &Engine, start: NaiveDate, end: NaiveDate) -> RangeSeries {
    let mut category_sums: BTreeMap<YearMonth, BTreeMap<ExpenseCategory, f64>> = BTreeMap::new();
    for record in engine.expense_records() {
        let first = record.first_of_month();
        if first >= start && first <= end {
            sum_into(
                category_sums.entry(record.month).or_default(),
                record.category,
                record.amount,
            );
        }
    }

    let mut buckets = Vec::new();
    let mut running_surplus = 0.0;
    for (month, totals) in admitted_months(engine, start, end) {
        running_surplus += totals.income - totals.expense;
        let sums = category_sums.get(&month).cloned().unwrap_or_default();
        buckets.push(build_bucket(
            month.label(),
            month.year,
            Some(month.month),
            totals,
            running_surplus,
            &sums,
        ));
    }

    RangeSeries {
        frequency: Frequency::Monthly,
        buckets,
    }
}

fn yearly_series(engine: &Engine, start: NaiveDate, end: NaiveDate) -> RangeSeries {
    let mut year_totals: BTreeMap<i32, MonthTotals> = BTreeMap::new();
    for (month, totals) in admitted_months(engine, start, end) {
        let entry = year_totals.entry(month.year).or_default();
        entry.expense += totals.expense;
        entry.income += totals.income;
        entry.income_to_date += totals.income_to_date;
        entry.budget += totals.budget;
    }

    let mut category_sums: BTreeMap<i32, BTreeMap<ExpenseCategory, f64>> = BTreeMap::new();
    for record in engine.expense_records() {
        let first = record.first_of_month();
        if first >= start && first <= end {
            sum_into(
                category_sums.entry(record.month.year).or_default(),
                record.category,
                record.amount,
            );
        }
    }

    let mut buckets = Vec::new();
    let mut running_surplus = 0.0;
    for (year, totals) in year_totals {
        running_surplus += totals.income - totals.expense;
        let sums = category_sums.get(&year).cloned().unwrap_or_default();
        buckets.push(build_bucket(
            year.to_string(),
            year,
            None,
            totals,
            running_surplus,
            &sums,
        ));
    }

    RangeSeries {
        frequency: Frequency::Yearly,
        buckets,
    }
}

fn admitted_months(
    engine: &Engine,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<(YearMonth, MonthTotals)> {
    engine
        .monthly_backbone()
        .iter()
        .filter(|(month, _)| {
            let first = month.first_day();
            first >= start && first <= end
        })
        .map(|(month, totals)| (*month, *totals))
        .collect::<Vec<(YearMonth, MonthTotals)>>()
}

fn build_bucket(
    label: String,
    year: i32,
    month: Option<u32>,
    totals: MonthTotals,
    running_surplus: f64,
    sums: &BTreeMap<ExpenseCategory, f64>,
) -> PeriodBucket {
    let expense_by_category = zero_fill(&ExpenseCategory::ALL, sums)
        .into_iter()
        .map(|(category, total)| CategoryAmount { category, total })
        .collect::<Vec<CategoryAmount>>();

    PeriodBucket {
        label,
        year,
        month,
        expense_total: round_money(totals.expense),
        income_total: round_money(totals.income),
        income_to_date: round_money(totals.income_to_date),
        budget_total: round_money(totals.budget),
        cumulative_surplus: round_money(running_surplus),
        expense_by_category,
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::EngineResult;
use crate::analytics::category::Frequency;
use crate::analytics::date::YearMonth;
use crate::analytics::types::{
    CategoryAmount, ClassificationRatios, Coverage, NameTotal, OverallTotals, QuarterWorth,
    RangeSeries, WeekdayRow,
};
use crate::analytics::{breakdown, coverage, series, totals, worth};
use crate::ledger::store::{self, StoreOptions};
use crate::ledger::types::{
    CashflowRecord, ExpenseRecord, LedgerRows, LoadReport, RowIssue, WorthRecord,
};
use crate::ledger::validate;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MonthTotals {
    pub(crate) expense: f64,
    pub(crate) income: f64,
    pub(crate) income_to_date: f64,
    pub(crate) budget: f64,
}

/// Immutable dataset snapshot plus its query surface.
///
/// Queries take `&self` and never mutate. To pick up ledger changes,
/// construct a new `Engine` and swap it in (for shared readers, behind an
/// `Arc`); in-flight queries keep reading the snapshot they started on.
#[derive(Debug, Clone)]
pub struct Engine {
    expenses: Vec<ExpenseRecord>,
    income: Vec<CashflowRecord>,
    budget: Vec<CashflowRecord>,
    worth: Vec<WorthRecord>,
    backbone: BTreeMap<YearMonth, MonthTotals>,
    today: NaiveDate,
}

#[derive(Debug)]
pub struct LoadedEngine {
    pub engine: Engine,
    pub report: LoadReport,
    pub data_dir: PathBuf,
}

impl Engine {
    pub fn from_rows(rows: LedgerRows, today: NaiveDate) -> (Self, LoadReport) {
        let validated = validate::validate_rows(rows);
        let engine = Self::from_records(
            validated.expenses,
            validated.income,
            validated.budget,
            validated.worth,
            today,
        );
        (engine, validated.report)
    }

    pub fn open(options: &StoreOptions, today: NaiveDate) -> EngineResult<LoadedEngine> {
        let data_dir = store::resolve_data_dir(options)?;
        let contents = store::read_store(&data_dir)?;
        let parse_issues = contents.issues;
        let (engine, mut report) = Self::from_rows(contents.rows, today);
        merge_parse_issues(&mut report, parse_issues);
        Ok(LoadedEngine {
            engine,
            report,
            data_dir,
        })
    }

    pub(crate) fn from_records(
        expenses: Vec<ExpenseRecord>,
        income: Vec<CashflowRecord>,
        budget: Vec<CashflowRecord>,
        worth: Vec<WorthRecord>,
        today: NaiveDate,
    ) -> Self {
        let backbone = build_backbone(&expenses, &income, &budget, today);
        Self {
            expenses,
            income,
            budget,
            worth,
            backbone,
            today,
        }
    }

    pub fn as_of_today(&self) -> NaiveDate {
        self.today
    }

    pub fn range_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        frequency: Frequency,
    ) -> EngineResult<RangeSeries> {
        series::range_series(self, start, end, frequency)
    }

    pub fn classification_ratios(&self, start: NaiveDate, end: NaiveDate) -> ClassificationRatios {
        breakdown::classification_ratios(&self.expenses, start, end)
    }

    pub fn category_totals(&self, start: NaiveDate, end: NaiveDate) -> Vec<CategoryAmount> {
        breakdown::category_totals(&self.expenses, start, end)
    }

    pub fn name_totals(&self, start: NaiveDate, end: NaiveDate) -> Vec<NameTotal> {
        breakdown::name_totals(&self.expenses, start, end)
    }

    pub fn weekday_totals(&self, start: NaiveDate, end: NaiveDate) -> Vec<WeekdayRow> {
        breakdown::weekday_totals(&self.expenses, start, end)
    }

    pub fn overall_totals(&self, as_of: NaiveDate) -> OverallTotals {
        totals::overall_totals(&self.expenses, &self.income, as_of)
    }

    pub fn worth_by_quarter(&self) -> Vec<QuarterWorth> {
        worth::worth_by_quarter(&self.worth)
    }

    pub fn coverage(&self) -> Coverage {
        coverage::coverage(self)
    }

    pub(crate) fn monthly_backbone(&self) -> &BTreeMap<YearMonth, MonthTotals> {
        &self.backbone
    }

    pub(crate) fn expense_records(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub(crate) fn income_records(&self) -> &[CashflowRecord] {
        &self.income
    }

    pub(crate) fn budget_records(&self) -> &[CashflowRecord] {
        &self.budget
    }
}

fn build_backbone(
    expenses: &[ExpenseRecord],
    income: &[CashflowRecord],
    budget: &[CashflowRecord],
    today: NaiveDate,
) -> BTreeMap<YearMonth, MonthTotals> {
    let mut backbone: BTreeMap<YearMonth, MonthTotals> = BTreeMap::new();

    for record in expenses {
        backbone.entry(record.month).or_default().expense += record.amount;
    }
    for record in income {
        let entry = backbone.entry(record.month).or_default();
        entry.income += record.amount;
        if record.date <= today {
            entry.income_to_date += record.amount;
        }
    }
    for record in budget {
        backbone.entry(record.month).or_default().budget += record.amount;
    }

    backbone
}

fn merge_parse_issues(report: &mut LoadReport, parse_issues: Vec<RowIssue>) {
    for issue in parse_issues {
        if let Some(count) = report
            .counts
            .iter_mut()
            .find(|count| count.ledger == issue.ledger)
        {
            count.rows_read += 1;
            count.rows_skipped += 1;
        }
        report.issues.push(issue);
    }

    report.issues.sort_by(|left, right| {
        left.ledger
            .cmp(&right.ledger)
            .then_with(|| left.row.cmp(&right.row))
    });
}

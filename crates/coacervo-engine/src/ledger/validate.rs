use chrono::NaiveDate;

use crate::analytics::category::{ExpenseCategory, WorthCategory};
use crate::analytics::date::parse_ledger_date;
use crate::ledger::types::{
    CashflowRecord, ExpenseRecord, LedgerCount, LedgerKind, LedgerRows, LoadReport, RowIssue,
    SourceRow, WorthRecord,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct ValidatedLedgers {
    pub(crate) expenses: Vec<ExpenseRecord>,
    pub(crate) income: Vec<CashflowRecord>,
    pub(crate) budget: Vec<CashflowRecord>,
    pub(crate) worth: Vec<WorthRecord>,
    pub(crate) report: LoadReport,
}

pub(crate) fn validate_rows(rows: LedgerRows) -> ValidatedLedgers {
    let mut issues = Vec::new();

    let (expenses, expense_count) = validate_expenses(rows.expenses, &mut issues);
    let (income, income_count) = validate_cashflow(LedgerKind::Income, rows.income, &mut issues);
    let (budget, budget_count) = validate_cashflow(LedgerKind::Budget, rows.budget, &mut issues);
    let (worth, worth_count) = validate_worth(rows.worth, &mut issues);

    ValidatedLedgers {
        expenses,
        income,
        budget,
        worth,
        report: LoadReport {
            counts: vec![expense_count, income_count, budget_count, worth_count],
            issues,
        },
    }
}

fn validate_expenses(
    rows: Vec<SourceRow>,
    issues: &mut Vec<RowIssue>,
) -> (Vec<ExpenseRecord>, LedgerCount) {
    let rows_read = rows.len() as i64;
    let mut records = Vec::new();

    for raw in rows {
        let mut hard_issues = Vec::new();

        let name = validate_required_string(
            LedgerKind::Expenses,
            raw.row,
            "Name",
            raw.name,
            &mut hard_issues,
        );
        let amount = validate_amount(LedgerKind::Expenses, raw.row, raw.amount, &mut hard_issues);
        let category = validate_expense_category(raw.row, raw.category, &mut hard_issues, issues);
        let date = validate_date(LedgerKind::Expenses, raw.row, raw.date, &mut hard_issues);

        if hard_issues.is_empty()
            && let (Some(name), Some(amount), Some(category), Some(date)) =
                (name, amount, category, date)
        {
            records.push(ExpenseRecord::new(name, amount, category, date));
        } else {
            issues.extend(hard_issues);
        }
    }

    let count = ledger_count(LedgerKind::Expenses, rows_read, records.len() as i64);
    (records, count)
}

fn validate_cashflow(
    kind: LedgerKind,
    rows: Vec<SourceRow>,
    issues: &mut Vec<RowIssue>,
) -> (Vec<CashflowRecord>, LedgerCount) {
    let rows_read = rows.len() as i64;
    let mut records = Vec::new();

    for raw in rows {
        let mut hard_issues = Vec::new();

        let name = validate_required_string(kind, raw.row, "Name", raw.name, &mut hard_issues);
        let amount = validate_amount(kind, raw.row, raw.amount, &mut hard_issues);
        let date = validate_date(kind, raw.row, raw.date, &mut hard_issues);
        // The Type column of these ledgers is free text and never aggregated.

        if hard_issues.is_empty()
            && let (Some(name), Some(amount), Some(date)) = (name, amount, date)
        {
            records.push(CashflowRecord::new(name, amount, date));
        } else {
            issues.extend(hard_issues);
        }
    }

    let count = ledger_count(kind, rows_read, records.len() as i64);
    (records, count)
}

fn validate_worth(
    rows: Vec<SourceRow>,
    issues: &mut Vec<RowIssue>,
) -> (Vec<WorthRecord>, LedgerCount) {
    let rows_read = rows.len() as i64;
    let mut records = Vec::new();

    for raw in rows {
        let mut hard_issues = Vec::new();

        let amount = validate_amount(LedgerKind::Worth, raw.row, raw.amount, &mut hard_issues);
        let category = validate_worth_category(raw.row, raw.category, &mut hard_issues);
        let date = validate_date(LedgerKind::Worth, raw.row, raw.date, &mut hard_issues);

        if hard_issues.is_empty()
            && let (Some(amount), Some(category), Some(date)) = (amount, category, date)
        {
            records.push(WorthRecord::new(amount, category, date));
        } else {
            issues.extend(hard_issues);
        }
    }

    let count = ledger_count(LedgerKind::Worth, rows_read, records.len() as i64);
    (records, count)
}

fn ledger_count(kind: LedgerKind, rows_read: i64, rows_loaded: i64) -> LedgerCount {
    LedgerCount {
        ledger: kind,
        rows_read,
        rows_loaded,
        rows_skipped: rows_read - rows_loaded,
    }
}

fn validate_required_string(
    ledger: LedgerKind,
    row: i64,
    field: &str,
    value: Option<String>,
    issues: &mut Vec<RowIssue>,
) -> Option<String> {
    let normalized = normalize_optional(value);
    if normalized.is_none() {
        issues.push(RowIssue {
            ledger,
            row,
            field: field.to_string(),
            code: "missing_required_field".to_string(),
            description: format!("{field} must be present and non-empty."),
            expected: Some("non-empty string".to_string()),
            received: Some(String::new()),
        });
    }
    normalized
}

fn validate_amount(
    ledger: LedgerKind,
    row: i64,
    value: Option<String>,
    issues: &mut Vec<RowIssue>,
) -> Option<f64> {
    let normalized = normalize_optional(value);
    let Some(candidate) = normalized else {
        issues.push(RowIssue {
            ledger,
            row,
            field: "Amount".to_string(),
            code: "missing_required_field".to_string(),
            description: "Amount must be present and non-empty.".to_string(),
            expected: Some("number (e.g. 42.15)".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    if let Ok(amount) = candidate.parse::<f64>()
        && amount.is_finite()
    {
        return Some(amount);
    }

    issues.push(RowIssue {
        ledger,
        row,
        field: "Amount".to_string(),
        code: "invalid_number".to_string(),
        description: format!("Amount must be a finite number; got \"{candidate}\""),
        expected: Some("number (e.g. 42.15)".to_string()),
        received: Some(candidate),
    });
    None
}

fn validate_date(
    ledger: LedgerKind,
    row: i64,
    value: Option<String>,
    issues: &mut Vec<RowIssue>,
) -> Option<NaiveDate> {
    let normalized = normalize_optional(value);
    let Some(candidate) = normalized else {
        issues.push(RowIssue {
            ledger,
            row,
            field: "Date".to_string(),
            code: "missing_required_field".to_string(),
            description: "Date must be present and non-empty.".to_string(),
            expected: Some("MM/DD/YYYY or YYYY-MM-DD".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    if let Some(date) = parse_ledger_date(&candidate) {
        return Some(date);
    }

    issues.push(RowIssue {
        ledger,
        row,
        field: "Date".to_string(),
        code: "invalid_date".to_string(),
        description: format!("Date must be a real calendar date; got \"{candidate}\""),
        expected: Some("MM/DD/YYYY or YYYY-MM-DD".to_string()),
        received: Some(candidate),
    });
    None
}

fn validate_expense_category(
    row: i64,
    value: Option<String>,
    hard_issues: &mut Vec<RowIssue>,
    issues: &mut Vec<RowIssue>,
) -> Option<ExpenseCategory> {
    let normalized = normalize_optional(value);
    let Some(candidate) = normalized else {
        hard_issues.push(RowIssue {
            ledger: LedgerKind::Expenses,
            row,
            field: "Type".to_string(),
            code: "missing_required_field".to_string(),
            description: "Type must be present and non-empty.".to_string(),
            expected: Some("a known expense category".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    if let Some(category) = ExpenseCategory::from_source(&candidate) {
        return Some(category);
    }

    // Unknown spellings still count toward totals, under Other.
    issues.push(RowIssue {
        ledger: LedgerKind::Expenses,
        row,
        field: "Type".to_string(),
        code: "unknown_category".to_string(),
        description: format!("\"{candidate}\" is not an expense category; counted as Other."),
        expected: Some("a known expense category".to_string()),
        received: Some(candidate),
    });
    Some(ExpenseCategory::Other)
}

fn validate_worth_category(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<RowIssue>,
) -> Option<WorthCategory> {
    let normalized = normalize_optional(value);
    let Some(candidate) = normalized else {
        issues.push(RowIssue {
            ledger: LedgerKind::Worth,
            row,
            field: "Type".to_string(),
            code: "missing_required_field".to_string(),
            description: "Type must be present and non-empty.".to_string(),
            expected: Some("Cash, Asset, Senex or Liability".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    if let Some(category) = WorthCategory::from_source(&candidate) {
        return Some(category);
    }

    issues.push(RowIssue {
        ledger: LedgerKind::Worth,
        row,
        field: "Type".to_string(),
        code: "unknown_category".to_string(),
        description: format!("\"{candidate}\" is not a worth category; row skipped."),
        expected: Some("Cash, Asset, Senex or Liability".to_string()),
        received: Some(candidate),
    });
    None
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    let current = value?;
    let trimmed = current.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

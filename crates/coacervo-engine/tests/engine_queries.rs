use chrono::NaiveDate;
use coacervo_engine::{Engine, ExpenseCategory, Frequency, LedgerKind, LedgerRows, SourceRow};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(value) => value,
        None => panic!("invalid test date"),
    }
}

fn raw(row: i64, name: &str, amount: &str, category: &str, date: &str) -> SourceRow {
    SourceRow {
        row,
        name: Some(name.to_string()),
        amount: Some(amount.to_string()),
        category: Some(category.to_string()),
        date: Some(date.to_string()),
    }
}

fn rent_and_paychecks() -> Engine {
    let rows = LedgerRows {
        expenses: vec![raw(1, "Rent", "1000", "Rent", "01/05/2024")],
        income: vec![
            raw(1, "Paycheck", "2000", "Income", "01/15/2024"),
            raw(2, "Bonus", "500", "Income", "02/01/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, report) = Engine::from_rows(rows, day(2024, 6, 1));
    assert!(report.is_clean());
    engine
}

#[test]
fn monthly_series_zero_fills_and_accumulates_surplus() {
    let engine = rent_and_paychecks();

    let series = engine.range_series(day(2024, 1, 1), day(2024, 2, 28), Frequency::Monthly);
    assert!(series.is_ok());
    if let Ok(series) = series {
        assert_eq!(series.frequency, Frequency::Monthly);
        assert_eq!(series.buckets.len(), 2);

        let january = &series.buckets[0];
        assert_eq!(january.label, "Jan-2024");
        assert_eq!(january.expense_total, 1000.0);
        assert_eq!(january.income_total, 2000.0);
        assert_eq!(january.cumulative_surplus, 1000.0);

        let february = &series.buckets[1];
        assert_eq!(february.label, "Feb-2024");
        assert_eq!(february.expense_total, 0.0);
        assert_eq!(february.income_total, 500.0);
        assert_eq!(february.cumulative_surplus, 1500.0);

        // A bucket without expenses still carries the whole category vocabulary.
        assert_eq!(february.expense_by_category.len(), 10);
        for entry in &february.expense_by_category {
            assert_eq!(entry.total, 0.0);
        }
    }
}

#[test]
fn surplus_restarts_at_zero_for_each_queried_range() {
    let engine = rent_and_paychecks();

    let series = engine.range_series(day(2024, 2, 1), day(2024, 2, 29), Frequency::Monthly);
    assert!(series.is_ok());
    if let Ok(series) = series {
        assert_eq!(series.buckets.len(), 1);
        assert_eq!(series.buckets[0].cumulative_surplus, 500.0);
    }
}

#[test]
fn classification_ratios_split_a_single_needs_row() {
    let engine = rent_and_paychecks();

    let ratios = engine.classification_ratios(day(2024, 1, 1), day(2024, 1, 31));
    assert_eq!(ratios.needs, 1000.0);
    assert_eq!(ratios.wants, 0.0);
    assert_eq!(ratios.savings, 0.0);
}

#[test]
fn weekly_buckets_are_a_distinct_unsupported_error() {
    let engine = rent_and_paychecks();

    let weekly = engine.range_series(day(2024, 1, 1), day(2024, 2, 28), Frequency::Weekly);
    assert!(weekly.is_err());
    let weekly_code = match weekly {
        Err(error) => error.code,
        Ok(_) => String::new(),
    };
    assert_eq!(weekly_code, "unsupported_frequency");

    // A frequency nobody defined is a plain argument error, not the same code.
    let unknown = Frequency::parse("fortnightly");
    assert!(unknown.is_err());
    if let Err(error) = unknown {
        assert_eq!(error.code, "invalid_argument");
        assert_ne!(error.code, weekly_code);
    }
}

#[test]
fn name_totals_rank_descending_and_merge_repeat_names() {
    let rows = LedgerRows {
        expenses: vec![
            raw(1, "Coffee", "5", "Food", "01/03/2024"),
            raw(2, "Rent", "1000", "Rent", "01/05/2024"),
            raw(3, "Coffee", "3", "Food", "01/09/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, report) = Engine::from_rows(rows, day(2024, 6, 1));
    assert!(report.is_clean());

    let totals = engine.name_totals(day(2024, 1, 1), day(2024, 1, 31));
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].name, "Rent");
    assert_eq!(totals[0].total, 1000.0);
    assert_eq!(totals[1].name, "Coffee");
    assert_eq!(totals[1].category, ExpenseCategory::Food);
    assert_eq!(totals[1].total, 8.0);
}

#[test]
fn name_totals_keep_input_order_on_ties_and_drop_zero_sums() {
    let rows = LedgerRows {
        expenses: vec![
            raw(1, "Gas", "50", "Transportation", "01/03/2024"),
            raw(2, "Parking", "50", "Transportation", "01/04/2024"),
            raw(3, "Return", "25", "Shop", "01/05/2024"),
            raw(4, "Return", "-25", "Shop", "01/06/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, _report) = Engine::from_rows(rows, day(2024, 6, 1));

    let totals = engine.name_totals(day(2024, 1, 1), day(2024, 1, 31));
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].name, "Gas");
    assert_eq!(totals[1].name, "Parking");
}

#[test]
fn category_totals_zero_fill_the_full_vocabulary() {
    let engine = rent_and_paychecks();

    let totals = engine.category_totals(day(2024, 1, 1), day(2024, 1, 31));
    assert_eq!(totals.len(), ExpenseCategory::ALL.len());
    for (entry, category) in totals.iter().zip(ExpenseCategory::ALL) {
        assert_eq!(entry.category, category);
        let expected = if category == ExpenseCategory::Rent {
            1000.0
        } else {
            0.0
        };
        assert_eq!(entry.total, expected);
    }
}

#[test]
fn widening_a_range_never_shrinks_category_totals() {
    let rows = LedgerRows {
        expenses: vec![
            raw(1, "Groceries", "10", "Grocery", "01/10/2024"),
            raw(2, "Groceries", "20", "Grocery", "02/10/2024"),
            raw(3, "Groceries", "30", "Grocery", "03/10/2024"),
            raw(4, "Movie", "15", "RecEnt", "02/20/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, _report) = Engine::from_rows(rows, day(2024, 6, 1));

    let narrow = engine.category_totals(day(2024, 2, 1), day(2024, 2, 29));
    let wide = engine.category_totals(day(2024, 1, 1), day(2024, 3, 31));
    for (narrow_entry, wide_entry) in narrow.iter().zip(&wide) {
        assert_eq!(narrow_entry.category, wide_entry.category);
        assert!(wide_entry.total >= narrow_entry.total);
    }
}

#[test]
fn classification_and_category_sums_agree() {
    let rows = LedgerRows {
        expenses: vec![
            raw(1, "Rent", "1000", "Rent", "01/05/2024"),
            raw(2, "Sneakers", "250.5", "Shop", "01/12/2024"),
            raw(3, "Transfer", "100.25", "Savings", "01/20/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, _report) = Engine::from_rows(rows, day(2024, 6, 1));

    let ratios = engine.classification_ratios(day(2024, 1, 1), day(2024, 1, 31));
    let classified_sum = ratios.needs + ratios.wants + ratios.savings;

    let category_sum: f64 = engine
        .category_totals(day(2024, 1, 1), day(2024, 1, 31))
        .iter()
        .map(|entry| entry.total)
        .sum();

    assert_eq!(classified_sum, 1350.75);
    assert_eq!(classified_sum, category_sum);
}

#[test]
fn inverted_ranges_yield_empty_results() {
    let engine = rent_and_paychecks();
    let start = day(2024, 3, 1);
    let end = day(2024, 1, 1);

    let series = engine.range_series(start, end, Frequency::Monthly);
    assert!(series.is_ok());
    if let Ok(series) = series {
        assert!(series.buckets.is_empty());
    }

    let ratios = engine.classification_ratios(start, end);
    assert_eq!(ratios.needs + ratios.wants + ratios.savings, 0.0);

    for entry in engine.category_totals(start, end) {
        assert_eq!(entry.total, 0.0);
    }

    assert!(engine.name_totals(start, end).is_empty());

    for row in engine.weekday_totals(start, end) {
        assert_eq!(row.total, 0.0);
    }
}

#[test]
fn weekday_totals_run_monday_to_sunday() {
    let rows = LedgerRows {
        expenses: vec![
            raw(1, "Brunch", "40", "Food", "01/07/2024"),
            raw(2, "Groceries", "60", "Grocery", "01/01/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, _report) = Engine::from_rows(rows, day(2024, 6, 1));

    let totals = engine.weekday_totals(day(2024, 1, 1), day(2024, 1, 31));
    assert_eq!(totals.len(), 7);
    assert_eq!(totals[0].weekday, "Monday");
    assert_eq!(totals[0].total, 60.0);
    assert_eq!(totals[6].weekday, "Sunday");
    assert_eq!(totals[6].total, 40.0);
    for row in &totals {
        assert_eq!(row.by_category.len(), 10);
    }
}

#[test]
fn overall_totals_blend_savings_into_saved() {
    let rows = LedgerRows {
        expenses: vec![
            raw(1, "Rent", "1000", "Rent", "01/05/2024"),
            raw(2, "Transfer", "200", "Savings", "01/20/2024"),
        ],
        income: vec![raw(1, "Paycheck", "2000", "Income", "01/15/2024")],
        ..LedgerRows::default()
    };
    let (engine, _report) = Engine::from_rows(rows, day(2024, 6, 1));

    let totals = engine.overall_totals(day(2024, 1, 31));
    assert_eq!(totals.income_total, 2000.0);
    assert_eq!(totals.expense_total, 1200.0);
    assert_eq!(totals.spend_total, 1000.0);
    assert_eq!(totals.saved_total, 1000.0);

    // A cutoff before the paycheck leaves only the rent behind.
    let early = engine.overall_totals(day(2024, 1, 10));
    assert_eq!(early.income_total, 0.0);
    assert_eq!(early.expense_total, 1000.0);
    assert_eq!(early.saved_total, -1000.0);
}

#[test]
fn income_to_date_stops_at_today() {
    let rows = LedgerRows {
        income: vec![
            raw(1, "Paycheck", "2000", "Income", "01/01/2024"),
            raw(2, "Paycheck", "2000", "Income", "01/25/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, _report) = Engine::from_rows(rows, day(2024, 1, 10));

    let series = engine.range_series(day(2024, 1, 1), day(2024, 1, 31), Frequency::Monthly);
    assert!(series.is_ok());
    if let Ok(series) = series {
        assert_eq!(series.buckets.len(), 1);
        assert_eq!(series.buckets[0].income_total, 4000.0);
        assert_eq!(series.buckets[0].income_to_date, 2000.0);
    }
}

#[test]
fn worth_quarters_split_on_calendar_boundaries() {
    let rows = LedgerRows {
        worth: vec![
            raw(1, "", "1000", "Cash", "03/31/2024"),
            raw(2, "", "1100", "Cash", "04/01/2024"),
            raw(3, "", "1200", "Cash", "09/30/2024"),
            raw(4, "", "1300", "Cash", "10/01/2024"),
            raw(5, "", "1400", "Cash", "12/31/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, report) = Engine::from_rows(rows, day(2024, 12, 31));
    assert!(report.is_clean());

    let quarters = engine.worth_by_quarter();
    let labels = quarters
        .iter()
        .map(|quarter| quarter.label.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(labels, vec!["2024 Q1", "2024 Q2", "2024 Q3", "2024 Q4"]);

    let q4_cash = quarters[3]
        .by_category
        .iter()
        .find(|entry| entry.category == coacervo_engine::WorthCategory::Cash)
        .map(|entry| entry.total);
    assert_eq!(q4_cash, Some(2700.0));
}

#[test]
fn september_31_worth_snapshot_is_rejected() {
    let rows = LedgerRows {
        worth: vec![
            raw(1, "", "1200", "Cash", "09/31/2024"),
            raw(2, "", "1300", "Cash", "10/01/2024"),
        ],
        ..LedgerRows::default()
    };
    let (engine, report) = Engine::from_rows(rows, day(2024, 12, 31));

    assert_eq!(report.rows_skipped(), 1);
    let issue = report
        .issues
        .iter()
        .find(|issue| issue.ledger == LedgerKind::Worth);
    assert!(issue.is_some());
    if let Some(issue) = issue {
        assert_eq!(issue.code, "invalid_date");
    }

    let labels = engine
        .worth_by_quarter()
        .iter()
        .map(|quarter| quarter.label.clone())
        .collect::<Vec<String>>();
    assert_eq!(labels, vec!["2024 Q4".to_string()]);
}

#[test]
fn an_empty_dataset_answers_every_query() {
    let (engine, report) = Engine::from_rows(LedgerRows::default(), day(2024, 6, 1));
    assert!(report.is_clean());

    let series = engine.range_series(day(2024, 1, 1), day(2024, 12, 31), Frequency::Monthly);
    assert!(series.is_ok());
    if let Ok(series) = series {
        assert!(series.buckets.is_empty());
    }

    let totals = engine.overall_totals(day(2024, 6, 1));
    assert_eq!(totals.income_total, 0.0);
    assert_eq!(totals.expense_total, 0.0);
    assert_eq!(totals.saved_total, 0.0);

    assert!(engine.worth_by_quarter().is_empty());
    assert!(engine.name_totals(day(2024, 1, 1), day(2024, 12, 31)).is_empty());

    let coverage = engine.coverage();
    assert!(coverage.months.is_empty());
    assert_eq!(coverage.earliest, None);
}

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::analytics::category::{Classification, ExpenseCategory};
use crate::analytics::date::{WEEKDAY_ORDER, round_money, weekday_label};
use crate::analytics::group::{sum_into, zero_fill};
use crate::analytics::types::{CategoryAmount, ClassificationRatios, NameTotal, WeekdayRow};
use crate::ledger::types::ExpenseRecord;

fn in_range(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &ExpenseRecord> {
    records
        .iter()
        .filter(move |record| record.date >= start && record.date <= end)
}

pub(crate) fn classification_ratios(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> ClassificationRatios {
    let mut sums: BTreeMap<Classification, f64> = BTreeMap::new();
    for record in in_range(records, start, end) {
        sum_into(&mut sums, record.category.classification(), record.amount);
    }

    let mut ratios = ClassificationRatios {
        needs: 0.0,
        wants: 0.0,
        savings: 0.0,
    };
    for (classification, total) in zero_fill(&Classification::ALL, &sums) {
        match classification {
            Classification::Needs => ratios.needs = total,
            Classification::Wants => ratios.wants = total,
            Classification::Savings => ratios.savings = total,
        }
    }
    ratios
}

pub(crate) fn category_totals(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CategoryAmount> {
    let mut sums: BTreeMap<ExpenseCategory, f64> = BTreeMap::new();
    for record in in_range(records, start, end) {
        sum_into(&mut sums, record.category, record.amount);
    }

    zero_fill(&ExpenseCategory::ALL, &sums)
        .into_iter()
        .map(|(category, total)| CategoryAmount { category, total })
        .collect::<Vec<CategoryAmount>>()
}

pub(crate) fn name_totals(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<NameTotal> {
    // Grouped by (name, category) so a name split across categories
    // keeps one row per category.
    let mut first_seen: Vec<(String, ExpenseCategory)> = Vec::new();
    let mut sums: HashMap<(String, ExpenseCategory), f64> = HashMap::new();
    for record in in_range(records, start, end) {
        let key = (record.name.clone(), record.category);
        if !sums.contains_key(&key) {
            first_seen.push(key.clone());
        }
        *sums.entry(key).or_insert(0.0) += record.amount;
    }

    let mut rows = first_seen
        .into_iter()
        .map(|key| {
            let total = round_money(sums.get(&key).copied().unwrap_or(0.0));
            let (name, category) = key;
            NameTotal {
                name,
                category,
                total,
            }
        })
        .filter(|row| row.total != 0.0)
        .collect::<Vec<NameTotal>>();

    // Stable sort keeps first-appearance order for equal totals.
    rows.sort_by(|left, right| right.total.total_cmp(&left.total));
    rows
}

pub(crate) fn weekday_totals(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WeekdayRow> {
    let mut rows = Vec::new();
    for day in WEEKDAY_ORDER {
        let mut sums: BTreeMap<ExpenseCategory, f64> = BTreeMap::new();
        let mut total = 0.0;
        for record in in_range(records, start, end).filter(|record| record.weekday == day) {
            sum_into(&mut sums, record.category, record.amount);
            total += record.amount;
        }

        let by_category = zero_fill(&ExpenseCategory::ALL, &sums)
            .into_iter()
            .map(|(category, total)| CategoryAmount { category, total })
            .collect::<Vec<CategoryAmount>>();

        rows.push(WeekdayRow {
            weekday: weekday_label(day).to_string(),
            total: round_money(total),
            by_category,
        });
    }
    rows
}

use crate::analytics::date::format_iso_date;
use crate::analytics::types::{Coverage, MonthRef};
use crate::engine::Engine;

pub(crate) fn coverage(engine: &Engine) -> Coverage {
    let months = engine
        .monthly_backbone()
        .keys()
        .map(|month| MonthRef {
            year: month.year,
            month: month.month,
            label: month.label(),
        })
        .collect::<Vec<MonthRef>>();

    let mut years = engine
        .monthly_backbone()
        .keys()
        .map(|month| month.year)
        .collect::<Vec<i32>>();
    years.dedup();
    years.reverse();

    let dates = engine
        .expense_records()
        .iter()
        .map(|record| record.date)
        .chain(engine.income_records().iter().map(|record| record.date))
        .chain(engine.budget_records().iter().map(|record| record.date));

    let mut earliest = None;
    let mut latest = None;
    for date in dates {
        let earliest_value = earliest.get_or_insert(date);
        if date < *earliest_value {
            *earliest_value = date;
        }
        let latest_value = latest.get_or_insert(date);
        if date > *latest_value {
            *latest_value = date;
        }
    }

    Coverage {
        years,
        months,
        earliest: earliest.map(|date| format_iso_date(&date)),
        latest: latest.map(|date| format_iso_date(&date)),
    }
}

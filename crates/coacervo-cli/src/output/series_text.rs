use chrono::NaiveDate;
use coacervo_engine::analytics::date::format_iso_date;
use coacervo_engine::{Frequency, RangeSeries};

use super::format::{self, Align, Column};

pub fn render_series(series: &RangeSeries, start: &NaiveDate, end: &NaiveDate) -> String {
    if series.buckets.is_empty() {
        return format!(
            "No buckets in range.\n\nNo ledger months fall between {} and {}.\nRun `coacervo coverage` to see the months your ledgers cover.",
            format_iso_date(start),
            format_iso_date(end)
        );
    }

    let flavor = match series.frequency {
        Frequency::Monthly => "Monthly",
        Frequency::Yearly => "Yearly",
        Frequency::Weekly => "Weekly",
    };
    let mut lines = vec![
        format!(
            "{flavor} series from {} to {}.",
            format_iso_date(start),
            format_iso_date(end)
        ),
        String::new(),
        "Buckets:".to_string(),
    ];

    // The to-date column only means something inside a month.
    let show_to_date = series.frequency == Frequency::Monthly;
    let mut columns = vec![
        Column {
            name: "Period",
            align: Align::Left,
        },
        Column {
            name: "Expenses",
            align: Align::Right,
        },
        Column {
            name: "Income",
            align: Align::Right,
        },
    ];
    if show_to_date {
        columns.push(Column {
            name: "To date",
            align: Align::Right,
        });
    }
    columns.push(Column {
        name: "Budget",
        align: Align::Right,
    });
    columns.push(Column {
        name: "Surplus",
        align: Align::Right,
    });

    let rows = series
        .buckets
        .iter()
        .map(|bucket| {
            let mut row = vec![
                bucket.label.clone(),
                format::format_money(bucket.expense_total),
                format::format_money(bucket.income_total),
            ];
            if show_to_date {
                row.push(format::format_money(bucket.income_to_date));
            }
            row.push(format::format_money(bucket.budget_total));
            row.push(format::format_money(bucket.cumulative_surplus));
            row
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Bucket",
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use coacervo_engine::{CategoryAmount, ExpenseCategory, Frequency, PeriodBucket, RangeSeries};

    use super::render_series;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(value) => value,
            None => panic!("invalid test date"),
        }
    }

    fn bucket(label: &str, year: i32, month: Option<u32>) -> PeriodBucket {
        PeriodBucket {
            label: label.to_string(),
            year,
            month,
            expense_total: 1000.0,
            income_total: 2000.0,
            income_to_date: 2000.0,
            budget_total: 1500.0,
            cumulative_surplus: 1000.0,
            expense_by_category: vec![CategoryAmount {
                category: ExpenseCategory::Rent,
                total: 1000.0,
            }],
        }
    }

    #[test]
    fn monthly_series_renders_heading_and_to_date_column() {
        let series = RangeSeries {
            frequency: Frequency::Monthly,
            buckets: vec![bucket("Jan-2024", 2024, Some(1))],
        };

        let rendered = render_series(&series, &day(2024, 1, 1), &day(2024, 1, 31));
        assert!(rendered.starts_with("Monthly series from 2024-01-01 to 2024-01-31."));
        assert!(rendered.contains("Buckets:"));
        assert!(rendered.contains("To date"));
        assert!(rendered.contains("Jan-2024"));
        assert!(rendered.contains("1000.00"));
        assert!(rendered.contains("2000.00"));
    }

    #[test]
    fn yearly_series_drops_the_to_date_column() {
        let series = RangeSeries {
            frequency: Frequency::Yearly,
            buckets: vec![bucket("2024", 2024, None)],
        };

        let rendered = render_series(&series, &day(2024, 1, 1), &day(2024, 12, 31));
        assert!(rendered.starts_with("Yearly series from"));
        assert!(!rendered.contains("To date"));
        assert!(rendered.contains("2024"));
    }

    #[test]
    fn empty_series_points_at_coverage() {
        let series = RangeSeries {
            frequency: Frequency::Monthly,
            buckets: Vec::new(),
        };

        let rendered = render_series(&series, &day(2030, 1, 1), &day(2030, 12, 31));
        assert!(rendered.starts_with("No buckets in range."));
        assert!(rendered.contains("coacervo coverage"));
    }
}

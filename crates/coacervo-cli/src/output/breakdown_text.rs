use chrono::NaiveDate;
use coacervo_engine::analytics::date::format_iso_date;
use coacervo_engine::{CategoryAmount, ClassificationRatios, NameTotal, WeekdayRow};

use super::format::{self, Align, Column};

pub fn render_ratios(ratios: &ClassificationRatios, start: &NaiveDate, end: &NaiveDate) -> String {
    let mut lines = vec![
        format!(
            "Needs, Wants, and Savings from {} to {}.",
            format_iso_date(start),
            format_iso_date(end)
        ),
        String::new(),
        "Split:".to_string(),
    ];

    let total = ratios.needs + ratios.wants + ratios.savings;
    let columns = [
        Column {
            name: "Class",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Share",
            align: Align::Right,
        },
    ];
    let rows = [
        ("Needs", ratios.needs),
        ("Wants", ratios.wants),
        ("Savings", ratios.savings),
    ]
    .iter()
    .map(|(label, amount)| {
        vec![
            (*label).to_string(),
            format::format_money(*amount),
            share_label(*amount, total),
        ]
    })
    .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Class",
    ));
    lines.join("\n")
}

fn share_label(amount: f64, total: f64) -> String {
    if total <= 0.0 {
        return "-".to_string();
    }
    format!("{:.1}%", amount / total * 100.0)
}

pub fn render_categories(rows: &[CategoryAmount], start: &NaiveDate, end: &NaiveDate) -> String {
    let mut lines = vec![
        format!(
            "Spending by category from {} to {}.",
            format_iso_date(start),
            format_iso_date(end)
        ),
        String::new(),
        "Categories:".to_string(),
    ];

    let columns = [
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.category.as_str().to_string(),
                format::format_money(row.total),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Category",
    ));
    lines.join("\n")
}

pub fn render_names(rows: &[NameTotal], start: &NaiveDate, end: &NaiveDate) -> String {
    if rows.is_empty() {
        return format!(
            "No spending found.\n\nNo expense rows fall between {} and {}.\nRun `coacervo coverage` to see the months your ledgers cover.",
            format_iso_date(start),
            format_iso_date(end)
        );
    }

    let mut lines = vec![
        format!(
            "Spending by name from {} to {}.",
            format_iso_date(start),
            format_iso_date(end)
        ),
        String::new(),
        "Names:".to_string(),
    ];

    let columns = [
        Column {
            name: "Name",
            align: Align::Left,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.category.as_str().to_string(),
                format::format_money(row.total),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Name",
    ));
    lines.join("\n")
}

pub fn render_weekdays(rows: &[WeekdayRow], start: &NaiveDate, end: &NaiveDate) -> String {
    let mut lines = vec![
        format!(
            "Spending by day of week from {} to {}.",
            format_iso_date(start),
            format_iso_date(end)
        ),
        String::new(),
        "Days:".to_string(),
    ];

    let columns = [
        Column {
            name: "Day",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| vec![row.weekday.clone(), format::format_money(row.total)])
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Day",
    ));
    lines.join("\n")
}

use coacervo_engine::{QuarterWorth, WorthCategory};

use super::format::{self, Align, Column};

pub fn render_worth(quarters: &[QuarterWorth]) -> String {
    if quarters.is_empty() {
        return "No worth snapshots found.\n\nAdd rows to worth.csv to track net worth by quarter."
            .to_string();
    }

    let mut lines = vec![
        "Net worth by quarter.".to_string(),
        String::new(),
        "Quarters:".to_string(),
    ];

    let mut columns = vec![Column {
        name: "Quarter",
        align: Align::Left,
    }];
    for category in WorthCategory::ALL {
        columns.push(Column {
            name: category.as_str(),
            align: Align::Right,
        });
    }

    let rows = quarters
        .iter()
        .map(|quarter| {
            let mut row = vec![quarter.label.clone()];
            for category in WorthCategory::ALL {
                let total = quarter
                    .by_category
                    .iter()
                    .find(|entry| entry.category == category)
                    .map(|entry| entry.total)
                    .unwrap_or(0.0);
                row.push(format::format_money(total));
            }
            row
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Quarter",
    ));
    lines.join("\n")
}

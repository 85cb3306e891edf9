use std::path::Path;

use coacervo_engine::LoadReport;

use super::format::{self, Align, Column};

pub fn render_check(report: &LoadReport, data_dir: &Path) -> String {
    let mut lines = vec![
        "Ledger check completed.".to_string(),
        String::new(),
        "Data directory:".to_string(),
        format!("  {}", data_dir.display()),
        String::new(),
        "Ledgers:".to_string(),
    ];

    let count_columns = [
        Column {
            name: "Ledger",
            align: Align::Left,
        },
        Column {
            name: "Read",
            align: Align::Right,
        },
        Column {
            name: "Loaded",
            align: Align::Right,
        },
        Column {
            name: "Skipped",
            align: Align::Right,
        },
    ];
    let count_rows = report
        .counts
        .iter()
        .map(|count| {
            vec![
                count.ledger.as_str().to_string(),
                count.rows_read.to_string(),
                count.rows_loaded.to_string(),
                count.rows_skipped.to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table_or_blocks(
        &count_columns,
        &count_rows,
        format::terminal_width(),
        "Ledger",
    ));

    lines.push(String::new());
    if report.is_clean() {
        lines.push("No issues found.".to_string());
        return lines.join("\n");
    }

    lines.push("Issues:".to_string());
    let issue_columns = [
        Column {
            name: "Ledger",
            align: Align::Left,
        },
        Column {
            name: "Row",
            align: Align::Right,
        },
        Column {
            name: "Field",
            align: Align::Left,
        },
        Column {
            name: "Code",
            align: Align::Left,
        },
        Column {
            name: "Detail",
            align: Align::Left,
        },
    ];
    let issue_rows = report
        .issues
        .iter()
        .map(|issue| {
            vec![
                issue.ledger.as_str().to_string(),
                issue.row.to_string(),
                issue.field.clone(),
                issue.code.clone(),
                issue.description.clone(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table_or_blocks(
        &issue_columns,
        &issue_rows,
        format::terminal_width(),
        "Issue",
    ));

    lines.join("\n")
}

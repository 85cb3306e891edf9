use coacervo_engine::Coverage;

use super::format;

pub fn render_coverage(coverage: &Coverage) -> String {
    if coverage.months.is_empty() {
        return "Your ledgers are empty.\n\nAdd dated rows to expenses.csv, income.csv, or budget.csv in your data directory.\nRun `coacervo check` to confirm they load."
            .to_string();
    }

    let mut lines = vec![
        "Ledger coverage.".to_string(),
        String::new(),
        "Summary:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Earliest:", option_date(&coverage.earliest)),
            ("Latest:", option_date(&coverage.latest)),
            ("Months:", coverage.months.len().to_string()),
            ("Years:", years_label(&coverage.years)),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Months:".to_string());
    for chunk in coverage.months.chunks(6) {
        let labels = chunk
            .iter()
            .map(|month| month.label.as_str())
            .collect::<Vec<&str>>();
        lines.push(format!("  {}", labels.join("  ")));
    }

    lines.join("\n")
}

fn option_date(value: &Option<String>) -> String {
    match value {
        Some(date) => date.clone(),
        None => "-".to_string(),
    }
}

fn years_label(years: &[i32]) -> String {
    years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

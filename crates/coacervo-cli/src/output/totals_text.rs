use chrono::NaiveDate;
use coacervo_engine::OverallTotals;
use coacervo_engine::analytics::date::format_iso_date;

use super::format;

pub fn render_totals(totals: &OverallTotals, as_of: &NaiveDate) -> String {
    let mut lines = vec![
        format!("Totals through {}.", format_iso_date(as_of)),
        String::new(),
        "Summary:".to_string(),
    ];

    lines.extend(format::key_value_rows(
        &[
            ("Income:", format::format_money(totals.income_total)),
            ("Expenses:", format::format_money(totals.expense_total)),
            ("Spend:", format::format_money(totals.spend_total)),
            ("Saved:", format::format_money(totals.saved_total)),
        ],
        2,
    ));
    lines.push(String::new());
    lines.push("Spend excludes Savings. Saved adds Savings to income minus expenses.".to_string());
    lines.join("\n")
}

use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

pub fn terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(120);
    cmp::max(from_env, 40)
}

/// Money cells always carry two decimals. Negative zero renders as 0.00.
pub fn format_money(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Cells are short labels and amounts, so columns take their natural
/// width. When even that overflows the terminal, rows fall back to
/// one labelled block per row instead of wrapping cell text.
pub fn render_table_or_blocks(
    columns: &[Column<'_>],
    rows: &[Vec<String>],
    max_width: usize,
    block_label: &str,
) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = natural_column_widths(columns, rows);
    let gap_total = COLUMN_GAP * columns.len().saturating_sub(1);
    let needed = INDENT + widths.iter().sum::<usize>() + gap_total;
    if needed > max_width {
        return render_blocks(columns, rows, block_label);
    }

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();

    let mut output = Vec::new();
    output.push(format_row(columns, &header, &widths));
    for row in rows {
        output.push(format_row(columns, row, &widths));
    }
    output
}

fn natural_column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .map(|column| column.name.len())
        .collect::<Vec<usize>>();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.chars().count());
            }
        }
    }

    widths
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut pieces = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(0);
        let value = cells.get(index).cloned().unwrap_or_default();

        let piece = match column.align {
            Align::Left => format!("{value:<width$}"),
            Align::Right => format!("{value:>width$}"),
        };
        pieces.push(piece);
    }

    let line = format!("{}{}", " ".repeat(INDENT), pieces.join("  "));
    line.trim_end().to_string()
}

fn render_blocks(columns: &[Column<'_>], rows: &[Vec<String>], block_label: &str) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    let labels = columns
        .iter()
        .map(|column| format!("{}:", column.name))
        .collect::<Vec<String>>();
    let label_width = labels.iter().map(|label| label.len()).max().unwrap_or(0);

    let mut output = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        output.push(format!("  {block_label} {}:", row_index + 1));

        for (column_index, label) in labels.iter().enumerate() {
            let value = row.get(column_index).cloned().unwrap_or_default();
            output.push(format!("    {label:<label_width$}  {value}"));
        }

        if row_index + 1 < rows.len() {
            output.push(String::new());
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::{Align, Column, format_money, key_value_rows, render_table_or_blocks};

    #[test]
    fn key_value_rows_align_labels() {
        let rows = key_value_rows(
            &[
                ("Rows read:", "100".to_string()),
                ("Rows skipped:", "0".to_string()),
            ],
            2,
        );

        assert_eq!(rows[0], "  Rows read:     100");
        assert_eq!(rows[1], "  Rows skipped:  0");
    }

    #[test]
    fn format_money_keeps_two_decimals() {
        assert_eq!(format_money(1000.0), "1000.00");
        assert_eq!(format_money(8.5), "8.50");
        assert_eq!(format_money(-250.129), "-250.13");
        assert_eq!(format_money(-0.0), "0.00");
    }

    #[test]
    fn table_right_aligns_amount_columns() {
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
        let rows = vec![
            vec!["Rent".to_string(), "1200.00".to_string()],
            vec!["Food".to_string(), "8.50".to_string()],
        ];

        let rendered = render_table_or_blocks(&columns, &rows, 80, "Row");
        assert_eq!(rendered[0], "  Category   Amount");
        assert_eq!(rendered[1], "  Rent      1200.00");
        assert_eq!(rendered[2], "  Food         8.50");
    }

    #[test]
    fn columns_grow_to_their_longest_cell() {
        let columns = [
            Column {
                name: "Name",
                align: Align::Left,
            },
            Column {
                name: "Amount",
                align: Align::Right,
            },
        ];
        let rows = vec![vec![
            "Transcontinental Railway Tickets".to_string(),
            "410.00".to_string(),
        ]];

        let rendered = render_table_or_blocks(&columns, &rows, 80, "Row");
        assert!(rendered[1].starts_with("  Transcontinental Railway Tickets"));
        assert!(rendered[1].ends_with("410.00"));
    }

    #[test]
    fn narrow_width_falls_back_to_blocks() {
        let columns = [
            Column {
                name: "Name",
                align: Align::Left,
            },
            Column {
                name: "Amount",
                align: Align::Right,
            },
            Column {
                name: "Category",
                align: Align::Left,
            },
        ];
        let rows = vec![vec![
            "Coffee".to_string(),
            "5.00".to_string(),
            "Food".to_string(),
        ]];

        let rendered = render_table_or_blocks(&columns, &rows, 20, "Expense");
        assert_eq!(rendered[0], "  Expense 1:");
        assert!(rendered[1].contains("Name:"));
        assert!(rendered[2].contains("Amount:"));
        assert!(rendered[3].contains("Category:"));
    }

    #[test]
    fn blocks_keep_every_value_without_truncation() {
        let columns = [
            Column {
                name: "Field",
                align: Align::Left,
            },
            Column {
                name: "Detail",
                align: Align::Left,
            },
        ];
        let rows = vec![vec![
            "Amount".to_string(),
            "a deliberately long skip reason that will never fit in twenty columns".to_string(),
        ]];

        let rendered = render_table_or_blocks(&columns, &rows, 20, "Issue");
        assert!(
            rendered
                .iter()
                .any(|line| line.contains("never fit in twenty columns"))
        );
    }

    #[test]
    fn empty_columns_render_nothing() {
        let rendered = render_table_or_blocks(&[], &[vec!["x".to_string()]], 80, "Row");
        assert!(rendered.is_empty());
    }
}

use std::collections::HashMap;
use std::path::Path;

use crate::ledger::types::{LedgerKind, RowIssue, SourceRow};
use crate::{EngineError, EngineResult};

#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedLedger {
    pub(crate) rows: Vec<SourceRow>,
    pub(crate) issues: Vec<RowIssue>,
}

pub(crate) fn required_headers(kind: LedgerKind) -> Vec<&'static str> {
    match kind {
        LedgerKind::Expenses | LedgerKind::Income | LedgerKind::Budget => {
            vec!["Name", "Amount", "Type", "Date"]
        }
        LedgerKind::Worth => vec!["Amount", "Type", "Date"],
    }
}

pub(crate) fn optional_headers(kind: LedgerKind) -> Vec<&'static str> {
    match kind {
        LedgerKind::Expenses | LedgerKind::Income | LedgerKind::Budget => Vec::new(),
        LedgerKind::Worth => vec!["Name"],
    }
}

pub(crate) fn parse_ledger(
    kind: LedgerKind,
    path: &Path,
    content: &str,
) -> EngineResult<ParsedLedger> {
    if content.trim().is_empty() {
        return Ok(ParsedLedger::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| EngineError::ledger_csv_invalid(path, "header row is missing or unreadable"))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(kind, &headers) {
        return Err(EngineError::ledger_schema_mismatch(
            path,
            to_strings(&required_headers(kind)),
            to_strings(&optional_headers(kind)),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    let mut issues = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let row = (row_index as i64) + 1;
        let Ok(record) = result_row else {
            issues.push(RowIssue {
                ledger: kind,
                row,
                field: "row".to_string(),
                code: "unreadable_row".to_string(),
                description: "Row is malformed CSV and was skipped.".to_string(),
                expected: Some(format!("{} comma-separated values", headers.len())),
                received: None,
            });
            continue;
        };

        rows.push(SourceRow {
            row,
            name: value_for(&record, &index_by_name, "Name"),
            amount: value_for(&record, &index_by_name, "Amount"),
            category: value_for(&record, &index_by_name, "Type"),
            date: value_for(&record, &index_by_name, "Date"),
        });
    }

    Ok(ParsedLedger { rows, issues })
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn headers_are_valid(kind: LedgerKind, actual_headers: &[String]) -> bool {
    let required_fields = required_headers(kind);
    let optional_fields = optional_headers(kind);

    for required in &required_fields {
        if !actual_headers.iter().any(|value| value == required) {
            return false;
        }
    }

    for header in actual_headers {
        let allowed = required_fields
            .iter()
            .any(|value| value == &header.as_str())
            || optional_fields
                .iter()
                .any(|value| value == &header.as_str());
        if !allowed {
            return false;
        }
    }

    true
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
}

use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const SUPPORTED_FREQUENCIES: [&str; 2] = ["monthly", "yearly"];

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EngineError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl EngineError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `coacervo {cmd} --help` for usage."),
            None => "Run `coacervo --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn unknown_frequency(received: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("`{received}` is not a bucketing frequency."),
            vec!["Use `monthly` or `yearly`.".to_string()],
        )
        .with_data(json!({
            "received": received,
            "supported": SUPPORTED_FREQUENCIES,
        }))
    }

    pub fn unsupported_frequency(requested: &str) -> Self {
        Self::new(
            "unsupported_frequency",
            &format!("`{requested}` bucketing is not supported."),
            vec!["Request `monthly` or `yearly` series instead.".to_string()],
        )
        .with_data(json!({
            "requested": requested,
            "supported": SUPPORTED_FREQUENCIES,
        }))
    }

    pub fn home_not_found() -> Self {
        Self::new(
            "home_not_found",
            "Could not determine your home directory.",
            vec![
                "Set the `COACERVO_DATA` environment variable to your ledger directory.".to_string(),
                "Or pass an explicit directory with `--data <dir>`.".to_string(),
            ],
        )
    }

    pub fn data_dir_not_found(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "data_dir_not_found",
            &format!("Ledger directory `{location}` does not exist."),
            vec![
                format!("Create `{location}` and place your ledger CSV files inside it."),
                "Or point `COACERVO_DATA` (or `--data <dir>`) at an existing directory."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn ledger_schema_mismatch(
        path: &Path,
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_schema_mismatch",
            &format!("CSV headers in `{location}` do not match the ledger schema."),
            vec![
                "Include all required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
                "Run `coacervo check` to review every ledger file.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn ledger_read_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_read_failed",
            &format!("Could not read ledger file `{location}`: {detail}"),
            vec![format!(
                "Confirm `{location}` is readable by the current user, then retry."
            )],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn ledger_csv_invalid(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_csv_invalid",
            &format!("Ledger file `{location}` is not readable as CSV: {detail}"),
            vec![
                format!("Re-export `{location}` as a plain UTF-8 CSV file with a header row."),
                "Run `coacervo check` to review every ledger file.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

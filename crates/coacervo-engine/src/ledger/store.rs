use std::fs;
use std::path::{Path, PathBuf};

use crate::ledger::parse;
use crate::ledger::types::{LedgerKind, LedgerRows, RowIssue};
use crate::{EngineError, EngineResult};

pub const DATA_DIR_ENV: &str = "COACERVO_DATA";
pub const DEFAULT_DATA_DIR: &str = ".coacervo";

#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub data_dir_override: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StoreContents {
    pub(crate) rows: LedgerRows,
    pub(crate) issues: Vec<RowIssue>,
}

pub fn resolve_data_dir(options: &StoreOptions) -> EngineResult<PathBuf> {
    let candidate = match &options.data_dir_override {
        Some(path) => path.clone(),
        None => {
            if let Some(override_path) = std::env::var_os(DATA_DIR_ENV) {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(DEFAULT_DATA_DIR)
            } else {
                return Err(EngineError::home_not_found());
            }
        }
    };

    absolutize(&candidate)
}

pub(crate) fn read_store(data_dir: &Path) -> EngineResult<StoreContents> {
    if !data_dir.is_dir() {
        return Err(EngineError::data_dir_not_found(data_dir));
    }

    let mut contents = StoreContents::default();
    for kind in LedgerKind::ALL {
        let path = data_dir.join(kind.file_name());
        let Some(content) = read_ledger_file(&path)? else {
            continue;
        };
        let parsed = parse::parse_ledger(kind, &path, &content)?;

        let target = match kind {
            LedgerKind::Expenses => &mut contents.rows.expenses,
            LedgerKind::Income => &mut contents.rows.income,
            LedgerKind::Budget => &mut contents.rows.budget,
            LedgerKind::Worth => &mut contents.rows.worth,
        };
        target.extend(parsed.rows);
        contents.issues.extend(parsed.issues);
    }

    Ok(contents)
}

fn read_ledger_file(path: &Path) -> EngineResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) if error.kind() == std::io::ErrorKind::InvalidData => Err(
            EngineError::ledger_csv_invalid(path, "file is not valid UTF-8"),
        ),
        Err(error) => Err(EngineError::ledger_read_failed(path, &error.to_string())),
    }
}

fn absolutize(path: &Path) -> EngineResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|_| EngineError::home_not_found())
}

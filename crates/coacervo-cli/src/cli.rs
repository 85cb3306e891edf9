use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthArg {
    pub year: i32,
    pub month: u32,
}

pub fn parse_month(value: &str) -> Result<MonthArg, String> {
    if value.len() != 7 {
        return Err("month must use YYYY-MM format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' {
        return Err("month must use YYYY-MM format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6] {
        if !bytes[index].is_ascii_digit() {
            return Err("month must use YYYY-MM format".to_string());
        }
    }

    let year = value[..4]
        .parse::<i32>()
        .map_err(|_| "month must use YYYY-MM format".to_string())?;
    let month = value[5..]
        .parse::<u32>()
        .map_err(|_| "month must use YYYY-MM format".to_string())?;
    if !(1..=12).contains(&month) {
        return Err("month must be between 01 and 12".to_string());
    }

    Ok(MonthArg { year, month })
}

#[derive(Debug, Parser)]
#[command(
    name = "coacervo",
    version,
    about = "ledger aggregation for your money dashboard",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Ledger directory (overrides COACERVO_DATA and ~/.coacervo)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Date-range filters shared by the spending queries. `--month` is a
/// shorthand for one month's full range and excludes `--from`/`--to`.
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// Start date filter (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub from: Option<IsoDate>,
    /// End date filter (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub to: Option<IsoDate>,
    /// Single month filter (YYYY-MM) instead of --from/--to
    #[arg(long, value_parser = parse_month, conflicts_with_all = ["from", "to"])]
    pub month: Option<MonthArg>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bucketed expense, income, and budget sums over a date range
    Series {
        #[command(flatten)]
        range: RangeArgs,
        /// Bucketing frequency: monthly or yearly
        #[arg(long, default_value = "monthly")]
        freq: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Needs, Wants, and Savings spending split over a date range
    Ratios {
        #[command(flatten)]
        range: RangeArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Spending by category over a date range
    Categories {
        #[command(flatten)]
        range: RangeArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Spending by transaction name over a date range
    Names {
        #[command(flatten)]
        range: RangeArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Spending by day of week over a date range
    Weekdays {
        #[command(flatten)]
        range: RangeArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Lifetime income, spend, and savings totals
    Totals {
        /// Count records on or before this date (YYYY-MM-DD, default today)
        #[arg(long, value_parser = parse_iso_date)]
        as_of: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Net worth by quarter and category
    Worth {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Months and years your ledgers cover
    Coverage {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Validate every ledger file and report skipped rows
    Check {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

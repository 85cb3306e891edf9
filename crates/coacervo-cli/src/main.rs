mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use coacervo_engine::EngineError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Coacervo - ledger aggregation for your money dashboard

Usage:
  coacervo <command>

Start here:
  coacervo check
  coacervo coverage
  coacervo series --help
";

const TOP_LEVEL_HELP: &str = "Coacervo — ledger aggregation for your money dashboard

USAGE: coacervo <command>

Point Coacervo at your ledgers:
  Drop expenses.csv, income.csv, budget.csv, and worth.csv into ~/.coacervo,
  set COACERVO_DATA, or pass --data <dir> on any command.

Check your data first:
  coacervo check                                        Validate every ledger and report skipped rows
  coacervo coverage                                     Show the months and years your ledgers cover

Query your spending:
  coacervo series --from 2024-01-01 --to 2024-12-31     Monthly expense, income, and budget series
  coacervo series --month 2024-03                       One month of the same series
  coacervo series --freq yearly                         Year-sized buckets instead of months
  coacervo ratios                                       Needs, Wants, and Savings split
  coacervo categories                                   Spending by category
  coacervo names                                        Spending by transaction name
  coacervo weekdays                                     Spending by day of week

Balance and worth:
  coacervo totals                                       Lifetime income, spend, and savings
  coacervo worth                                        Net worth by quarter

Every command accepts --json for machine-readable output.
Run `coacervo <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    if is_top_level_help_request(&raw_args) {
                        if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                            return Err(ExitCode::from(2));
                        }
                    } else if write_stdout_text(&err.to_string()).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                parse_error_with_command_hint(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Picks the command name out of raw CLI args for use in help hints.
/// Flag values survive the filter, so only a leading command word counts.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["series", ..] => Some("series"),
        ["ratios", ..] => Some("ratios"),
        ["categories", ..] => Some("categories"),
        ["names", ..] => Some("names"),
        ["weekdays", ..] => Some("weekdays"),
        ["totals", ..] => Some("totals"),
        ["worth", ..] => Some("worth"),
        ["coverage", ..] => Some("coverage"),
        ["check", ..] => Some("check"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn parse_error_with_command_hint(clean_message: &str, command_hint: Option<&str>) -> EngineError {
    if clean_message.contains("YYYY-MM-DD") {
        return EngineError::invalid_argument_with_recovery(
            clean_message,
            date_format_steps("Write dates as YYYY-MM-DD, for example 2024-03-31.", command_hint),
        );
    }
    if clean_message.contains("YYYY-MM") {
        return EngineError::invalid_argument_with_recovery(
            clean_message,
            date_format_steps("Write months as YYYY-MM, for example 2024-03.", command_hint),
        );
    }

    EngineError::invalid_argument_for_command(clean_message, command_hint)
}

fn date_format_steps(example: &str, command_hint: Option<&str>) -> Vec<String> {
    let mut steps = vec![example.to_string()];
    match command_hint {
        Some(hint) => steps.push(format!("Run `coacervo {hint} --help` for usage.")),
        None => steps.push("Run `coacervo --help` for usage.".to_string()),
    }
    steps
}

fn exit_code_for_error(error: &EngineError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn is_internal_error(error: &EngineError) -> bool {
    error.code.starts_with("internal_")
        || matches!(error.code.as_str(), "ledger_read_failed" | "home_not_found")
}

mod breakdown_text;
mod check_text;
mod coverage_text;
mod error_text;
mod format;
mod json;
mod mode;
mod series_text;
mod totals_text;
mod worth_text;

use std::io;

use coacervo_engine::EngineError;

use crate::dispatch::CommandOutput;
use crate::stdout_io;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(output: &CommandOutput, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(output),
        OutputMode::Json => json::render_success_json(output)?,
    };
    stdout_io::write_stdout_line(&body)
}

pub fn print_failure(error: &EngineError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    stdout_io::write_stdout_line(&body)
}

fn render_text_success(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Series { series, start, end } => {
            series_text::render_series(series, start, end)
        }
        CommandOutput::Ratios { ratios, start, end } => {
            breakdown_text::render_ratios(ratios, start, end)
        }
        CommandOutput::Categories { rows, start, end } => {
            breakdown_text::render_categories(rows, start, end)
        }
        CommandOutput::Names { rows, start, end } => {
            breakdown_text::render_names(rows, start, end)
        }
        CommandOutput::Weekdays { rows, start, end } => {
            breakdown_text::render_weekdays(rows, start, end)
        }
        CommandOutput::Totals { totals, as_of } => totals_text::render_totals(totals, as_of),
        CommandOutput::Worth { quarters } => worth_text::render_worth(quarters),
        CommandOutput::Coverage { coverage } => coverage_text::render_coverage(coverage),
        CommandOutput::Check { report, data_dir } => check_text::render_check(report, data_dir),
    }
}

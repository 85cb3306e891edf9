use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use coacervo_engine::analytics::date;
use coacervo_engine::{
    CategoryAmount, ClassificationRatios, Coverage, Engine, EngineResult, Frequency, LoadReport,
    LoadedEngine, NameTotal, OverallTotals, QuarterWorth, RangeSeries, StoreOptions, WeekdayRow,
    YearMonth,
};

use crate::cli::{Cli, Commands, IsoDate, RangeArgs};
use crate::stdout_io;

/// One command's worth of query results, ready for rendering.
#[derive(Debug)]
pub enum CommandOutput {
    Series {
        series: RangeSeries,
        start: NaiveDate,
        end: NaiveDate,
    },
    Ratios {
        ratios: ClassificationRatios,
        start: NaiveDate,
        end: NaiveDate,
    },
    Categories {
        rows: Vec<CategoryAmount>,
        start: NaiveDate,
        end: NaiveDate,
    },
    Names {
        rows: Vec<NameTotal>,
        start: NaiveDate,
        end: NaiveDate,
    },
    Weekdays {
        rows: Vec<WeekdayRow>,
        start: NaiveDate,
        end: NaiveDate,
    },
    Totals {
        totals: OverallTotals,
        as_of: NaiveDate,
    },
    Worth {
        quarters: Vec<QuarterWorth>,
    },
    Coverage {
        coverage: Coverage,
    },
    Check {
        report: LoadReport,
        data_dir: PathBuf,
    },
}

pub fn dispatch(cli: &Cli) -> EngineResult<CommandOutput> {
    match &cli.command {
        Commands::Series { range, freq, .. } => {
            let frequency = Frequency::parse(freq)?;
            let loaded = open_for_query(cli)?;
            let (start, end) = resolve_range(&loaded.engine, range)?;
            let series = loaded.engine.range_series(start, end, frequency)?;
            Ok(CommandOutput::Series { series, start, end })
        }
        Commands::Ratios { range, .. } => {
            let loaded = open_for_query(cli)?;
            let (start, end) = resolve_range(&loaded.engine, range)?;
            let ratios = loaded.engine.classification_ratios(start, end);
            Ok(CommandOutput::Ratios { ratios, start, end })
        }
        Commands::Categories { range, .. } => {
            let loaded = open_for_query(cli)?;
            let (start, end) = resolve_range(&loaded.engine, range)?;
            let rows = loaded.engine.category_totals(start, end);
            Ok(CommandOutput::Categories { rows, start, end })
        }
        Commands::Names { range, .. } => {
            let loaded = open_for_query(cli)?;
            let (start, end) = resolve_range(&loaded.engine, range)?;
            let rows = loaded.engine.name_totals(start, end);
            Ok(CommandOutput::Names { rows, start, end })
        }
        Commands::Weekdays { range, .. } => {
            let loaded = open_for_query(cli)?;
            let (start, end) = resolve_range(&loaded.engine, range)?;
            let rows = loaded.engine.weekday_totals(start, end);
            Ok(CommandOutput::Weekdays { rows, start, end })
        }
        Commands::Totals { as_of, .. } => {
            let loaded = open_for_query(cli)?;
            let as_of = match as_of {
                Some(value) => date_from_arg(value, "--as-of")?,
                None => loaded.engine.as_of_today(),
            };
            let totals = loaded.engine.overall_totals(as_of);
            Ok(CommandOutput::Totals { totals, as_of })
        }
        Commands::Worth { .. } => {
            let loaded = open_for_query(cli)?;
            let quarters = loaded.engine.worth_by_quarter();
            Ok(CommandOutput::Worth { quarters })
        }
        Commands::Coverage { .. } => {
            let loaded = open_for_query(cli)?;
            let coverage = loaded.engine.coverage();
            Ok(CommandOutput::Coverage { coverage })
        }
        Commands::Check { .. } => {
            let loaded = open_engine(cli)?;
            Ok(CommandOutput::Check {
                report: loaded.report,
                data_dir: loaded.data_dir,
            })
        }
    }
}

fn open_engine(cli: &Cli) -> EngineResult<LoadedEngine> {
    let options = StoreOptions {
        data_dir_override: cli.data.clone(),
    };
    Engine::open(&options, Local::now().date_naive())
}

/// Opens the store for a query command and warns on stderr when rows
/// were skipped. `check` reports skips on stdout instead.
fn open_for_query(cli: &Cli) -> EngineResult<LoadedEngine> {
    let loaded = open_engine(cli)?;
    let skipped = loaded.report.rows_skipped();
    if skipped > 0 {
        let noun = if skipped == 1 { "row" } else { "rows" };
        let _ = stdout_io::write_stderr_line(&format!(
            "warning: skipped {skipped} ledger {noun}; run `coacervo check` for details"
        ));
    }
    Ok(loaded)
}

fn resolve_range(engine: &Engine, range: &RangeArgs) -> EngineResult<(NaiveDate, NaiveDate)> {
    if let Some(month) = &range.month {
        return Ok(date::month_bounds(YearMonth {
            year: month.year,
            month: month.month,
        }));
    }

    // Monthly buckets are admitted by their first day, so default bounds
    // widen to whole months or the earliest ledger month would drop out.
    let coverage = engine.coverage();
    let start = match &range.from {
        Some(value) => date_from_arg(value, "--from")?,
        None => match coverage_date(coverage.earliest.as_deref()) {
            Some(date) => YearMonth::of(date).first_day(),
            None => engine.as_of_today(),
        },
    };
    let end = match &range.to {
        Some(value) => date_from_arg(value, "--to")?,
        None => match coverage_date(coverage.latest.as_deref()) {
            Some(date) => YearMonth::of(date).last_day(),
            None => engine.as_of_today(),
        },
    };
    Ok((start, end))
}

fn date_from_arg(value: &IsoDate, field_name: &str) -> EngineResult<NaiveDate> {
    date::parse_iso_date(value.as_str(), field_name)
}

fn coverage_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|iso| NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok())
}

use std::io;

use coacervo_engine::EngineError;
use coacervo_engine::analytics::date::format_iso_date;
use serde::Serialize;
use serde_json::{Value, json};

use crate::dispatch::CommandOutput;

const JSON_VERSION: &str = "v1";

pub fn render_success_json(output: &CommandOutput) -> io::Result<String> {
    let data = match output {
        CommandOutput::Series { series, start, end } => json!({
            "from": format_iso_date(start),
            "to": format_iso_date(end),
            "frequency": series.frequency,
            "buckets": series.buckets,
        }),
        CommandOutput::Ratios { ratios, start, end } => json!({
            "from": format_iso_date(start),
            "to": format_iso_date(end),
            "needs": ratios.needs,
            "wants": ratios.wants,
            "savings": ratios.savings,
        }),
        CommandOutput::Categories { rows, start, end } => json!({
            "from": format_iso_date(start),
            "to": format_iso_date(end),
            "rows": rows,
        }),
        CommandOutput::Names { rows, start, end } => json!({
            "from": format_iso_date(start),
            "to": format_iso_date(end),
            "rows": rows,
        }),
        CommandOutput::Weekdays { rows, start, end } => json!({
            "from": format_iso_date(start),
            "to": format_iso_date(end),
            "rows": rows,
        }),
        CommandOutput::Totals { totals, as_of } => json!({
            "as_of": format_iso_date(as_of),
            "income_total": totals.income_total,
            "expense_total": totals.expense_total,
            "spend_total": totals.spend_total,
            "saved_total": totals.saved_total,
        }),
        CommandOutput::Worth { quarters } => json!({
            "quarters": quarters,
        }),
        CommandOutput::Coverage { coverage } => json!({
            "years": coverage.years,
            "months": coverage.months,
            "earliest": coverage.earliest,
            "latest": coverage.latest,
        }),
        CommandOutput::Check { report, data_dir } => json!({
            "data_dir": data_dir.display().to_string(),
            "counts": report.counts,
            "issues": report.issues,
        }),
    };

    serialize_json_pretty(&json!({
        "ok": true,
        "version": JSON_VERSION,
        "data": data,
    }))
}

pub fn render_error_json(error: &EngineError) -> io::Result<String> {
    let mut inner = json!({
        "code": error.code,
        "message": error.message,
        "recovery_steps": error.recovery_steps,
    });
    if let Some(data) = &error.data {
        if let Value::Object(map) = &mut inner {
            map.insert("data".to_string(), data.clone());
        }
    }

    serialize_json_pretty(&json!({ "error": inner }))
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use coacervo_engine::{
        CategoryAmount, ClassificationRatios, EngineError, ExpenseCategory, Frequency, PeriodBucket,
        RangeSeries,
    };
    use serde_json::Value;

    use super::{render_error_json, render_success_json};
    use crate::dispatch::CommandOutput;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(value) => value,
            None => panic!("invalid test date"),
        }
    }

    #[test]
    fn series_json_uses_structured_envelope() {
        let output = CommandOutput::Series {
            series: RangeSeries {
                frequency: Frequency::Monthly,
                buckets: vec![PeriodBucket {
                    label: "Jan-2024".to_string(),
                    year: 2024,
                    month: Some(1),
                    expense_total: 1000.0,
                    income_total: 2000.0,
                    income_to_date: 2000.0,
                    budget_total: 1500.0,
                    cumulative_surplus: 1000.0,
                    expense_by_category: vec![CategoryAmount {
                        category: ExpenseCategory::Rent,
                        total: 1000.0,
                    }],
                }],
            },
            start: day(2024, 1, 1),
            end: day(2024, 1, 31),
        };

        let rendered = render_success_json(&output);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(
                    value["data"]["from"],
                    Value::String("2024-01-01".to_string())
                );
                assert_eq!(
                    value["data"]["frequency"],
                    Value::String("monthly".to_string())
                );
                assert_eq!(value["data"]["buckets"][0]["expense_total"], 1000.0);
                assert_eq!(value["data"]["buckets"][0]["cumulative_surplus"], 1000.0);
            }
        }
    }

    #[test]
    fn yearly_buckets_omit_the_month_field() {
        let output = CommandOutput::Series {
            series: RangeSeries {
                frequency: Frequency::Yearly,
                buckets: vec![PeriodBucket {
                    label: "2024".to_string(),
                    year: 2024,
                    month: None,
                    expense_total: 0.0,
                    income_total: 0.0,
                    income_to_date: 0.0,
                    budget_total: 0.0,
                    cumulative_surplus: 0.0,
                    expense_by_category: Vec::new(),
                }],
            },
            start: day(2024, 1, 1),
            end: day(2024, 12, 31),
        };

        let rendered = render_success_json(&output);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert!(value["data"]["buckets"][0].get("month").is_none());
            }
        }
    }

    #[test]
    fn ratios_json_carries_the_resolved_range() {
        let output = CommandOutput::Ratios {
            ratios: ClassificationRatios {
                needs: 1000.0,
                wants: 0.0,
                savings: 0.0,
            },
            start: day(2024, 1, 1),
            end: day(2024, 3, 31),
        };

        let rendered = render_success_json(&output);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["data"]["to"], Value::String("2024-03-31".to_string()));
                assert_eq!(value["data"]["needs"], 1000.0);
            }
        }
    }

    #[test]
    fn runtime_error_json_uses_universal_shape() {
        let error = EngineError::new("data_dir_not_found", "missing", vec!["mkdir".to_string()]);
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("data_dir_not_found".to_string())
                );
                assert!(value.get("ok").is_none());
                assert!(value["error"].get("data").is_none());
            }
        }
    }

    #[test]
    fn error_json_keeps_structured_data_when_present() {
        let error = EngineError::unsupported_frequency("weekly");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("unsupported_frequency".to_string())
                );
                assert_eq!(
                    value["error"]["data"]["requested"],
                    Value::String("weekly".to_string())
                );
            }
        }
    }
}

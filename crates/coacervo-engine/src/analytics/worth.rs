use std::collections::BTreeMap;

use crate::analytics::category::WorthCategory;
use crate::analytics::date::QuarterKey;
use crate::analytics::group::{sum_into, zero_fill};
use crate::analytics::types::{QuarterWorth, WorthAmount};
use crate::ledger::types::WorthRecord;

pub(crate) fn worth_by_quarter(records: &[WorthRecord]) -> Vec<QuarterWorth> {
    let mut sums: BTreeMap<QuarterKey, BTreeMap<WorthCategory, f64>> = BTreeMap::new();
    for record in records {
        sum_into(
            sums.entry(record.quarter).or_default(),
            record.category,
            record.amount,
        );
    }

    sums.into_iter()
        .map(|(quarter, by_category)| {
            let by_category = zero_fill(&WorthCategory::ALL, &by_category)
                .into_iter()
                .map(|(category, total)| WorthAmount { category, total })
                .collect::<Vec<WorthAmount>>();
            QuarterWorth {
                year: quarter.year,
                quarter: quarter.quarter,
                label: quarter.label(),
                by_category,
            }
        })
        .collect::<Vec<QuarterWorth>>()
}

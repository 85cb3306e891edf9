use std::collections::BTreeMap;

use crate::analytics::date::round_money;

pub(crate) fn sum_into<K: Ord>(sums: &mut BTreeMap<K, f64>, key: K, amount: f64) {
    *sums.entry(key).or_insert(0.0) += amount;
}

// Every vocabulary member is emitted, in vocabulary order, 0.0 where nothing
// was summed. All aggregation outputs go through this one path.
pub(crate) fn zero_fill<K: Ord + Copy>(vocabulary: &[K], sums: &BTreeMap<K, f64>) -> Vec<(K, f64)> {
    vocabulary
        .iter()
        .map(|key| (*key, round_money(sums.get(key).copied().unwrap_or(0.0))))
        .collect::<Vec<(K, f64)>>()
}

use crate::model::{AverageCell, CellKey, FailureCell, TrialRecord};
use itertools::Itertools;
use std::collections::BTreeMap;

/// partitions trials into (successes, failures) on the failed relative_cost sentinel.
pub fn split_outcomes(records: &[TrialRecord]) -> (Vec<TrialRecord>, Vec<TrialRecord>) {
    records.iter().cloned().partition(|r| !r.is_failure())
}

/// mean relative_cost per cell, sorted by cell.
///
/// expects successful trials only; failed trials carry the -1 sentinel and
/// would drag the mean down.
pub fn average(records: &[TrialRecord]) -> Vec<AverageCell> {
    let mut accumulators: BTreeMap<CellKey, (f64, usize)> = BTreeMap::new();
    for record in records.iter() {
        let (sum, count) = accumulators.entry(record.cell_key()).or_insert((0.0, 0));
        *sum += record.relative_cost;
        *count += 1;
    }
    accumulators
        .iter()
        .map(|(key, (sum, count))| AverageCell::new(key, sum / *count as f64, *count))
        .collect_vec()
}

/// the trial with the minimum relative_cost per cell, sorted by cell.
/// when several trials share the minimum the first one read wins.
pub fn best(records: &[TrialRecord]) -> Vec<TrialRecord> {
    let mut minimums: BTreeMap<CellKey, &TrialRecord> = BTreeMap::new();
    for record in records.iter() {
        minimums
            .entry(record.cell_key())
            .and_modify(|current| {
                if record.relative_cost < current.relative_cost {
                    *current = record;
                }
            })
            .or_insert(record);
    }
    minimums.into_values().cloned().collect_vec()
}

/// number of failed trials per cell, sorted by cell. None when no trial
/// in the whole sweep failed.
pub fn failures(records: &[TrialRecord]) -> Option<Vec<FailureCell>> {
    let counts = records
        .iter()
        .filter(|r| r.is_failure())
        .counts_by(|r| r.cell_key());
    if counts.is_empty() {
        return None;
    }
    let rows = counts
        .into_iter()
        .sorted_by_key(|(key, _)| *key)
        .map(|(key, count)| {
            log::debug!("{count} failed trials at {key}");
            FailureCell::new(&key, count)
        })
        .collect_vec();
    Some(rows)
}

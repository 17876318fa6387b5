use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub entry: String,
    pub count: u64,
}

/// Tolerant parse result for a usage-count file. Rows whose count column is
/// missing or fails integer parse are dropped silently; only their number is
/// kept for the run summary.
#[derive(Debug, Clone, Default)]
pub struct CountParseOutcome {
    pub rows: Vec<CountRow>,
    pub skipped_rows: usize,
}

/// Reads `entry,count` rows. The first record is consumed as a header without
/// validating that it is one.
pub fn read_count_rows(path: &Path) -> Result<CountParseOutcome> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut outcome = CountParseOutcome::default();
    for record in reader.records() {
        let record = record?;
        let entry = record.get(0).unwrap_or_default();
        match record.get(1).and_then(|raw| raw.trim().parse::<u64>().ok()) {
            Some(count) => outcome.rows.push(CountRow {
                entry: entry.to_string(),
                count,
            }),
            None => outcome.skipped_rows += 1,
        }
    }
    Ok(outcome)
}

/// Independent end-to-end re-read of a count file, summing the count column
/// with the same skip rule as `read_count_rows`. Used for the cross-check
/// total printed after all environments are processed.
pub fn sum_counts(path: &Path) -> Result<u64> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut total = 0u64;
    for record in reader.records() {
        let record = record?;
        if let Some(count) = record.get(1).and_then(|raw| raw.trim().parse::<u64>().ok()) {
            total += count;
        }
    }
    Ok(total)
}

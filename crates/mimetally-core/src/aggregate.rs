use std::collections::HashMap;

use serde::Serialize;

use crate::classify::normalize_entry;
use crate::counts::CountParseOutcome;
use crate::mapping::MimeTable;

/// Insertion-ordered aggregate bucket: per-key running totals plus the raw
/// contributing entry strings for traceability. Key order is first-seen
/// order so reruns on unchanged input produce identical reports.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    order: Vec<String>,
    totals: HashMap<String, u64>,
    entries: HashMap<String, Vec<String>>,
    sum: u64,
}

impl Tally {
    pub fn add(&mut self, key: &str, entry: &str, count: u64) {
        if !self.totals.contains_key(key) {
            self.order.push(key.to_string());
        }
        *self.totals.entry(key.to_string()).or_default() += count;
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(entry.to_string());
        self.sum += count;
    }

    #[must_use]
    pub fn sum(&self) -> u64 {
        self.sum
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys with their totals, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.totals[key]))
    }

    #[must_use]
    pub fn entries_for(&self, key: &str) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Valid,
    Potential,
    Invalid,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryClassification {
    pub entry: String,
    pub bucket: Bucket,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

/// Buckets one label: exact valid MIME first (raw string compared against the
/// lower-cased set, no normalization), then the fuzzy classifier on the
/// lower-cased text, then invalid.
#[must_use]
pub fn classify_entry(table: &MimeTable, entry: &str) -> EntryClassification {
    if table.is_valid_mime(entry) {
        return EntryClassification {
            entry: entry.to_string(),
            bucket: Bucket::Valid,
            mime: Some(entry.to_string()),
        };
    }
    if let Some(mime) = table.classifier().match_mime(&normalize_entry(entry)) {
        return EntryClassification {
            entry: entry.to_string(),
            bucket: Bucket::Potential,
            mime: Some(mime.to_string()),
        };
    }
    EntryClassification {
        entry: entry.to_string(),
        bucket: Bucket::Invalid,
        mime: None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnvironmentReport {
    pub valid: Tally,
    pub potential: Tally,
    pub invalid: Tally,
    pub skipped_rows: usize,
}

#[must_use]
pub fn classify_rows(table: &MimeTable, outcome: &CountParseOutcome) -> EnvironmentReport {
    let mut report = EnvironmentReport {
        skipped_rows: outcome.skipped_rows,
        ..EnvironmentReport::default()
    };

    for row in &outcome.rows {
        let classification = classify_entry(table, &row.entry);
        match classification.bucket {
            Bucket::Valid => report.valid.add(&row.entry, &row.entry, row.count),
            Bucket::Potential => {
                let mime = classification.mime.as_deref().unwrap_or(&row.entry);
                report.potential.add(mime, &row.entry, row.count);
            }
            Bucket::Invalid => report.invalid.add(&row.entry, &row.entry, row.count),
        }
    }
    report
}

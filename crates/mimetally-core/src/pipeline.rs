use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregate::{self, EntryClassification};
use crate::counts;
use crate::discover::{self, Environment};
use crate::error::{MimeTallyError, Result};
use crate::mapping::MimeTable;
use crate::report;

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentSummary {
    pub environment: String,
    pub input_file: String,
    pub found: bool,
    pub valid_sum: u64,
    pub potential_sum: u64,
    pub invalid_sum: u64,
    pub skipped_rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub environments: Vec<EnvironmentSummary>,
    pub total_count: u64,
}

/// Batch runner over the fixed environment roster. Holds the root directory
/// and the mapping table loaded once at construction.
#[derive(Debug)]
pub struct Pipeline {
    root: PathBuf,
    table: MimeTable,
}

impl Pipeline {
    /// Loads the mapping table, resolving `mapping` case-insensitively under
    /// `root` first and as a literal path second.
    pub fn new(root: impl Into<PathBuf>, mapping: &str) -> Result<Self> {
        let root = root.into();
        let mapping_path = match discover::find_file(&root, mapping)? {
            Some(path) => path,
            None => {
                let direct = root.join(mapping);
                if direct.is_file() {
                    direct
                } else {
                    return Err(MimeTallyError::NotFound(mapping.to_string()));
                }
            }
        };
        let table = MimeTable::load(&mapping_path)?;
        Ok(Self { root, table })
    }

    #[must_use]
    pub fn table(&self) -> &MimeTable {
        &self.table
    }

    #[must_use]
    pub fn classify_entry(&self, entry: &str) -> EntryClassification {
        aggregate::classify_entry(&self.table, entry)
    }

    /// Processes the three environments in roster order and returns their
    /// sums plus the independent cross-check total. A missing input file
    /// short-circuits everything for that environment, including its
    /// contribution to the cross-check total.
    pub fn run(&self) -> Result<RunSummary> {
        let mut environments = Vec::new();
        let mut total_count = 0u64;

        for env in &discover::ENVIRONMENTS {
            let environment = env_label(env);
            let Some(input_path) = discover::find_file(&self.root, env.input_file)? else {
                environments.push(EnvironmentSummary {
                    environment,
                    input_file: env.input_file.to_string(),
                    found: false,
                    valid_sum: 0,
                    potential_sum: 0,
                    invalid_sum: 0,
                    skipped_rows: 0,
                });
                continue;
            };

            total_count += counts::sum_counts(&input_path)?;
            environments.push(self.process_environment(env, &input_path, environment)?);
        }

        Ok(RunSummary {
            environments,
            total_count,
        })
    }

    fn process_environment(
        &self,
        env: &Environment,
        input_path: &Path,
        environment: String,
    ) -> Result<EnvironmentSummary> {
        let outcome = counts::read_count_rows(input_path)?;
        let buckets = aggregate::classify_rows(&self.table, &outcome);

        report::write_potential_report(&self.root.join(env.potential_report), &buckets.potential)?;
        report::write_valid_report(&self.root.join(env.valid_report), &buckets.valid)?;
        report::write_invalid_report(&self.root.join(env.invalid_report), &buckets.invalid)?;

        Ok(EnvironmentSummary {
            environment,
            input_file: env.input_file.to_string(),
            found: true,
            valid_sum: buckets.valid.sum(),
            potential_sum: buckets.potential.sum(),
            invalid_sum: buckets.invalid.sum(),
            skipped_rows: buckets.skipped_rows,
        })
    }
}

fn env_label(env: &Environment) -> String {
    discover::extract_env(env.input_file).unwrap_or_else(|| env.input_file.to_string())
}

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// One deployment segment with its fixed input and report filenames.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub input_file: &'static str,
    pub potential_report: &'static str,
    pub valid_report: &'static str,
    pub invalid_report: &'static str,
}

pub const ENVIRONMENTS: [Environment; 3] = [
    Environment {
        input_file: "prod-us-only-mime-types-counts.csv",
        potential_report: "mime-type-mapping-US.csv",
        valid_report: "valid-mime-type-mapping-US.csv",
        invalid_report: "invalid-mime-type-mapping-US.csv",
    },
    Environment {
        input_file: "prod-eu-only-mime-types-counts.csv",
        potential_report: "mime-type-mapping-EU.csv",
        valid_report: "valid-mime-type-mapping-EU.csv",
        invalid_report: "invalid-mime-type-mapping-EU.csv",
    },
    Environment {
        input_file: "prod-global-mime-types-counts.csv",
        potential_report: "mime-type-mapping-Global.csv",
        valid_report: "valid-mime-type-mapping-Global.csv",
        invalid_report: "invalid-mime-type-mapping-Global.csv",
    },
];

static ENV_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"prod-(.*?)-mime-types-counts\.csv").expect("literal pattern")
});

/// Environment label embedded in a count filename, e.g.
/// `prod-eu-only-mime-types-counts.csv` yields `eu-only`.
#[must_use]
pub fn extract_env(filename: &str) -> Option<String> {
    ENV_PATTERN
        .captures(filename)
        .map(|captures| captures[1].to_string())
}

/// Case-insensitive filename match in one directory, non-recursive.
pub fn find_file(dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case(name)
        {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}

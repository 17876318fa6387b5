use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::classify::Classifier;
use crate::error::{MimeTallyError, Result};

pub const MAPPING_FILE_NAME: &str = "mimeTypes.csv";

const REQUIRED_COLUMNS: [&str; 2] = ["extension", "mime_type"];

#[derive(Debug, Deserialize)]
struct MappingRow {
    extension: String,
    mime_type: String,
}

/// Immutable lookup tables built once from the mapping file and passed by
/// reference through the pipeline. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    ext_to_mime: HashMap<String, String>,
    valid_mimes: HashSet<String>,
    classifier: Classifier,
}

impl MimeTable {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MimeTallyError::NotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(MimeTallyError::Validation(format!(
                    "mapping file is missing required column '{column}': {}",
                    path.display()
                )));
            }
        }

        let mut table = Self::default();
        for row in reader.deserialize::<MappingRow>() {
            let row = row?;
            let ext = row.extension.trim().to_lowercase();
            let mime = row.mime_type.trim().to_lowercase();

            table.ext_to_mime.insert(ext.clone(), mime.clone());
            table.valid_mimes.insert(mime.clone());
            table.classifier.register(&ext, &mime)?;
        }
        Ok(table)
    }

    /// Exact membership test against the known MIME strings. The raw entry is
    /// compared as-is; normalization only applies to the fuzzy path.
    #[must_use]
    pub fn is_valid_mime(&self, entry: &str) -> bool {
        self.valid_mimes.contains(entry)
    }

    #[must_use]
    pub fn mime_for_extension(&self, ext: &str) -> Option<&str> {
        self.ext_to_mime.get(ext).map(String::as_str)
    }

    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Ordered patterns attributing entries to one MIME type. Groups are ordered
/// by the MIME type's first appearance in the mapping file, and that order is
/// the whole precedence contract: the first group with any hit wins,
/// regardless of pattern specificity.
#[derive(Debug, Clone)]
struct RuleGroup {
    mime: String,
    patterns: Vec<Regex>,
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    groups: Vec<RuleGroup>,
}

impl Classifier {
    /// Registers one mapping row. Each row contributes three patterns to its
    /// MIME's group: the extension as an isolated token, the extension as a
    /// suffix (concatenations like `testjpg`), and the full MIME string as an
    /// isolated token.
    pub(crate) fn register(&mut self, ext: &str, mime: &str) -> Result<()> {
        let sources = [
            format!(r"\b{}\b", regex::escape(ext)),
            format!(r"{}$", regex::escape(ext)),
            format!(r"\b{}\b", regex::escape(mime)),
        ];

        let index = match self.groups.iter().position(|group| group.mime == mime) {
            Some(index) => index,
            None => {
                self.groups.push(RuleGroup {
                    mime: mime.to_string(),
                    patterns: Vec::new(),
                });
                self.groups.len() - 1
            }
        };

        for source in sources {
            let pattern = RegexBuilder::new(&source).case_insensitive(true).build()?;
            self.groups[index].patterns.push(pattern);
        }
        Ok(())
    }

    /// Best-effort heuristic match for a normalized (lower-cased) label.
    /// Returns the first registered MIME whose any pattern hits, `None` when
    /// nothing matches.
    #[must_use]
    pub fn match_mime(&self, entry: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|group| group.patterns.iter().any(|pattern| pattern.is_match(entry)))
            .map(|group| group.mime.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn normalize_entry(entry: &str) -> String {
    entry.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(rows: &[(&str, &str)]) -> Classifier {
        let mut classifier = Classifier::default();
        for (ext, mime) in rows {
            classifier.register(ext, mime).expect("register");
        }
        classifier
    }

    #[test]
    fn matches_extension_as_isolated_token() {
        let classifier = classifier(&[("jpg", "image/jpeg")]);
        assert_eq!(classifier.match_mime("file.jpg"), Some("image/jpeg"));
        assert_eq!(classifier.match_mime("jpg"), Some("image/jpeg"));
    }

    #[test]
    fn matches_extension_as_trailing_concatenation() {
        let classifier = classifier(&[("jpg", "image/jpeg")]);
        assert_eq!(
            classifier.match_mime(&normalize_entry("testJPG")),
            Some("image/jpeg")
        );
        assert_eq!(classifier.match_mime("myfilejpg"), Some("image/jpeg"));
    }

    #[test]
    fn matches_full_mime_string_as_token() {
        let classifier = classifier(&[("jpg", "image/jpeg")]);
        assert_eq!(
            classifier.match_mime("logged as image/jpeg today"),
            Some("image/jpeg")
        );
    }

    #[test]
    fn unmatched_entry_returns_none() {
        let classifier = classifier(&[("jpg", "image/jpeg")]);
        assert_eq!(classifier.match_mime("weirdstuff"), None);
    }

    #[test]
    fn first_registered_group_wins_on_overlap() {
        // "jpeg png" hits image/jpeg via the later "jpeg" row, but image/jpeg
        // was registered first, so it takes precedence over image/png even
        // though png's row came earlier than jpeg's.
        let classifier = classifier(&[
            ("jpg", "image/jpeg"),
            ("png", "image/png"),
            ("jpeg", "image/jpeg"),
        ]);
        assert_eq!(classifier.match_mime("jpeg png"), Some("image/jpeg"));
        assert_eq!(classifier.match_mime("plain png"), Some("image/png"));
    }

    #[test]
    fn special_characters_in_mapping_are_escaped() {
        let classifier = classifier(&[("c++", "text/x-c++src")]);
        assert_eq!(classifier.match_mime("main c++"), Some("text/x-c++src"));
        assert_eq!(classifier.match_mime("cxx"), None);
    }
}

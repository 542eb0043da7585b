//! Tag normalization and frequency counting

use crate::domain::document::ChatExport;
use crate::domain::report::Report;
use std::collections::HashMap;

/// Whitespace for tag trimming: Unicode `White_Space` plus the information
/// separators U+001C..U+001F.
fn is_tag_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim surrounding whitespace from a raw tag.
///
/// Returns `None` when nothing is left. No other normalization is applied,
/// `"Work"` and `"work"` stay distinct.
pub fn normalize_tag(raw: &str) -> Option<&str> {
    let tag = raw.trim_matches(is_tag_whitespace);
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Occurrence counts of distinct tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFrequency {
    counts: HashMap<String, usize>,
}

impl TagFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one raw tag. Blank tags are ignored.
    pub fn record(&mut self, raw: &str) {
        let Some(tag) = normalize_tag(raw) else {
            return;
        };
        match self.counts.get_mut(tag) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(tag.to_string(), 1);
            }
        }
    }

    /// Count of a single tag, 0 if never seen.
    #[cfg(test)]
    pub fn get(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Fold every tag of every chat into a fresh frequency table.
    pub fn from_export(export: &ChatExport<'_>) -> Self {
        export.iter().flat_map(|chat| chat.tags()).collect()
    }

    /// Freeze into a report sorted by tag.
    pub fn into_report(self, record_count: usize) -> Report {
        Report::new(record_count, self.counts.into_iter().collect())
    }
}

impl<'a> Extend<&'a str> for TagFrequency {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for tag in iter {
            self.record(tag);
        }
    }
}

impl<'a> FromIterator<&'a str> for TagFrequency {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut freq = Self::new();
        freq.extend(iter);
        freq
    }
}

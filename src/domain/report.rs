//! Tag frequency report

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;

/// Ordering of the tag lines in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending by tag, code-point order
    #[default]
    Tag,
    /// Descending by count, ties ascending by tag
    Count,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Same spelling as the lowercase serde names
        match s {
            "tag" => Ok(SortOrder::Tag),
            "count" => Ok(SortOrder::Count),
            _ => Err(format!(
                "Invalid sort order: '{}'. Valid sort orders are: tag, count",
                s
            )),
        }
    }
}

/// Result of counting tags over one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    record_count: usize,
    entries: Vec<(String, usize)>,
}

impl Report {
    /// Build a report. Entries are put in tag order.
    pub fn new(record_count: usize, mut entries: Vec<(String, usize)>) -> Self {
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Report {
            record_count,
            entries,
        }
    }

    /// Number of chat records in the export.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of distinct tags.
    pub fn unique_tag_count(&self) -> usize {
        self.entries.len()
    }

    /// `(tag, count)` pairs in the current order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Re-order the entries.
    pub fn sorted(mut self, order: SortOrder) -> Self {
        match order {
            SortOrder::Tag => self.entries.sort_unstable_by(|a, b| a.0.cmp(&b.0)),
            SortOrder::Count => self
                .entries
                .sort_unstable_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0))),
        }
        self
    }
}

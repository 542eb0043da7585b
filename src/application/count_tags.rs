//! Count tags use case

use crate::domain::{ChatExport, Report, TagFrequency};
use crate::error::Result;
use crate::infrastructure::{ChatExportSource, FileSystemSource};
use std::path::Path;

/// Service for counting tag occurrences across a chat export.
pub struct CountTagsService<S = FileSystemSource> {
    source: S,
}

impl CountTagsService<FileSystemSource> {
    /// Create a service reading from the file system.
    pub fn from_filesystem() -> Self {
        Self::new(FileSystemSource::new())
    }
}

impl<S: ChatExportSource> CountTagsService<S> {
    /// Create a new count tags service.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the export at `path` and count its tags.
    ///
    /// The returned report is in tag order.
    pub fn run(&self, path: &Path) -> Result<Report> {
        let document = self.source.load(path)?;
        let export = ChatExport::new(&document);

        let record_count = export.record_count();
        let frequency = TagFrequency::from_export(&export);
        if frequency.is_empty() && record_count > 0 {
            log::debug!("none of the {} records carry tags", record_count);
        }
        log::debug!(
            "{} records, {} distinct tags in {}",
            record_count,
            frequency.len(),
            path.display()
        );

        Ok(frequency.into_report(record_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagCountError;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory source keyed by path.
    struct MemorySource(HashMap<PathBuf, String>);

    impl MemorySource {
        fn with(path: &str, contents: &str) -> Self {
            MemorySource(HashMap::from([(PathBuf::from(path), contents.to_string())]))
        }
    }

    impl ChatExportSource for MemorySource {
        fn load(&self, path: &Path) -> Result<Value> {
            let contents = self.0.get(path).ok_or_else(|| TagCountError::NotFound {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })?;
            FileSystemSource::parse_bytes(path, contents.as_bytes())
        }
    }

    fn run(contents: &str) -> Result<Report> {
        CountTagsService::new(MemorySource::with("chats.json", contents)).run(Path::new("chats.json"))
    }

    fn pairs(report: &Report) -> Vec<(&str, usize)> {
        report
            .entries()
            .iter()
            .map(|(tag, n)| (tag.as_str(), *n))
            .collect()
    }

    #[test]
    fn test_empty_chats() {
        let report = run(r#"{"userChats": []}"#).unwrap();
        assert_eq!(report.record_count(), 0);
        assert_eq!(report.unique_tag_count(), 0);
    }

    #[test]
    fn test_trim_keeps_case_distinct() {
        let report = run(r#"{"userChats":[{"tags":["work","Work "]},{"tags":["home"]}]}"#).unwrap();
        assert_eq!(report.record_count(), 2);
        assert_eq!(report.unique_tag_count(), 3);
        assert_eq!(pairs(&report), vec![("Work", 1), ("home", 1), ("work", 1)]);
    }

    #[test]
    fn test_chat_without_tags() {
        let report = run(r#"{"userChats":[{"title":"no tags"},{"tags":["a","a"]}]}"#).unwrap();
        assert_eq!(report.record_count(), 2);
        assert_eq!(pairs(&report), vec![("a", 2)]);
    }

    #[test]
    fn test_blank_tags_not_counted() {
        let report = run(r#"{"userChats":[{"tags":["", "   ", "\t\n", " x "]}]}"#).unwrap();
        assert_eq!(report.unique_tag_count(), 1);
        assert_eq!(pairs(&report), vec![("x", 1)]);
    }

    #[test]
    fn test_missing_user_chats() {
        let report = run(r#"{"folders": [{"tags": ["ignored"]}]}"#).unwrap();
        assert_eq!(report.record_count(), 0);
        assert_eq!(report.unique_tag_count(), 0);
    }

    #[test]
    fn test_wrong_shapes_degrade_to_empty() {
        let report = run(r#"{"userChats":[{"tags":"work"},{"tags":null},7,{"tags":[1,"ok"]}]}"#)
            .unwrap();
        assert_eq!(report.record_count(), 4);
        assert_eq!(pairs(&report), vec![("ok", 1)]);
    }

    #[test]
    fn test_invalid_json() {
        let result = run("{not valid json");
        assert!(matches!(result, Err(TagCountError::Parse { .. })));
    }

    #[test]
    fn test_missing_path() {
        let service = CountTagsService::new(MemorySource::with("chats.json", "{}"));
        let result = service.run(Path::new("other.json"));
        assert!(matches!(result, Err(TagCountError::NotFound { .. })));
    }

    #[test]
    fn test_run_is_repeatable() {
        let contents = r#"{"userChats":[{"tags":["b","a","b"]},{"tags":["c"]}]}"#;
        let service = CountTagsService::new(MemorySource::with("chats.json", contents));
        let first = service.run(Path::new("chats.json")).unwrap();
        let second = service.run(Path::new("chats.json")).unwrap();
        assert_eq!(first, second);
    }
}

//! Domain layer - Business logic and domain models

pub mod document;
pub mod frequency;
pub mod report;

pub use document::{Chat, ChatExport};
pub use frequency::{normalize_tag, TagFrequency};
pub use report::{Report, SortOrder};

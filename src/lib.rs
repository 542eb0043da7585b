//! tagcount - Tag frequency report for chat exports
//!
//! Reads a JSON export holding a `userChats` array, counts every trimmed,
//! non-empty entry of each chat's `tags` array, and reports the counts.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagCountError;

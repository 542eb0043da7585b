//! Read-only views over a parsed chat export
//!
//! The export is never validated against a schema. Both accessors here follow
//! one policy: a value that is absent or has the wrong JSON type reads as an
//! empty sequence.

use serde_json::Value;

/// Key holding the chat records at the document root.
pub const RECORDS_KEY: &str = "userChats";

/// Key holding the tag list inside a chat record.
pub const TAGS_KEY: &str = "tags";

/// The root of a chat export document
#[derive(Debug, Clone, Copy)]
pub struct ChatExport<'a> {
    root: &'a Value,
}

impl<'a> ChatExport<'a> {
    pub fn new(root: &'a Value) -> Self {
        ChatExport { root }
    }

    /// The `userChats` records, or an empty slice if the root is not an
    /// object or the key is missing or not an array.
    pub fn chats(&self) -> &'a [Value] {
        match self.root.get(RECORDS_KEY) {
            Some(Value::Array(records)) => records.as_slice(),
            Some(other) => {
                log::debug!("'{}' is {}, treating as empty", RECORDS_KEY, kind(other));
                &[]
            }
            None => &[],
        }
    }

    /// Number of chat records in the export.
    pub fn record_count(&self) -> usize {
        self.chats().len()
    }

    /// Iterate the chat records.
    pub fn iter(&self) -> impl Iterator<Item = Chat<'a>> {
        self.chats().iter().map(Chat::new)
    }
}

/// One chat record
#[derive(Debug, Clone, Copy)]
pub struct Chat<'a> {
    record: &'a Value,
}

impl<'a> Chat<'a> {
    pub fn new(record: &'a Value) -> Self {
        Chat { record }
    }

    /// The raw tag strings of this chat.
    ///
    /// Yields nothing if the record is not an object or `tags` is missing or
    /// not an array. Non-string elements of the array are skipped.
    pub fn tags(&self) -> impl Iterator<Item = &'a str> {
        let items: &'a [Value] = match self.record.get(TAGS_KEY) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                log::trace!("'{}' is {}, treating as empty", TAGS_KEY, kind(other));
                &[]
            }
            None => &[],
        };
        items.iter().filter_map(Value::as_str)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

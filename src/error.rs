//! Error types for tagcount

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagcount
#[derive(Debug, Error)]
pub enum TagCountError {
    #[error("Input file not found or unreadable: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TagCountError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagCountError::NotFound { .. } => 2,
            TagCountError::Parse { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagCountError::NotFound { path, source } => {
                format!(
                    "Input file not found or unreadable: {} ({})\n\n\
                    Suggestions:\n\
                    • Pass the export path as the first argument (e.g., tagcount exports/userChats.json)\n\
                    • Set TAGCOUNT_INPUT environment variable to the export path\n\
                    • Set 'input' in the file passed with --config",
                    path.display(),
                    source
                )
            }
            TagCountError::Parse { path, source } => {
                format!(
                    "Invalid JSON in {} at line {}, column {}: {}\n\n\
                    Suggestions:\n\
                    • Check that the file is a complete JSON export, not a truncated download\n\
                    • The file must be UTF-8 encoded (a leading byte-order mark is fine)",
                    path.display(),
                    source.line(),
                    source.column(),
                    source
                )
            }
            TagCountError::Config(msg) => {
                if msg.contains("sort order") {
                    format!(
                        "{}\n\n\
                        Valid sort orders: tag, count\n\
                        Example: tagcount --sort count",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagCountError
pub type Result<T> = std::result::Result<T, TagCountError>;

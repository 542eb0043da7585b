//! Loading chat exports from disk

use crate::error::{Result, TagCountError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Abstract source of parsed chat export documents
pub trait ChatExportSource {
    /// Load and parse the document at `path`
    fn load(&self, path: &Path) -> Result<Value>;
}

/// Reads exports from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemSource;

impl FileSystemSource {
    pub fn new() -> Self {
        FileSystemSource
    }

    /// Parse raw export bytes, ignoring a leading byte-order mark.
    pub fn parse_bytes(path: &Path, bytes: &[u8]) -> Result<Value> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        serde_json::from_slice(bytes).map_err(|source| TagCountError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ChatExportSource for FileSystemSource {
    fn load(&self, path: &Path) -> Result<Value> {
        let bytes = fs::read(path).map_err(|source| TagCountError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Self::parse_bytes(path, &bytes)
    }
}

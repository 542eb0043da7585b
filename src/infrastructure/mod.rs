//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod source;

pub use config::Config;
pub use source::{ChatExportSource, FileSystemSource};

//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagcount")]
#[command(about = "Count tag frequencies in a chat export", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON export (default: userChats.json)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Order of tag lines (tag, count)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Config file (input path and sort order)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

use crate::options::{OutputFormat, OutputMode, SortSpec};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "decl_count",
    version,
    about = "Count contract/library declaration lines in source files"
)]
pub struct Args {
    /// Directory containing the source files to scan (non-recursive)
    pub dir: PathBuf,

    /// Also count loop-opener lines (for/while)
    #[arg(long)]
    pub loops: bool,

    /// Skip unreadable entries with a warning instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output mode
    #[arg(long, value_enum, default_value = "total")]
    pub output_mode: OutputMode,

    /// Sort keys for the full listing, e.g. "decls:desc,name"
    #[arg(long)]
    pub sort: Option<SortSpec>,

    /// Append a TOTAL row to csv/tsv output
    #[arg(long)]
    pub total_row: bool,
}

use crate::options::{OutputFormat, OutputMode, SortKey};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory whose entries are scanned (non-recursive).
    pub root: PathBuf,

    /// Also count loop-opener lines.
    #[builder(default)]
    pub count_loops: bool,

    /// Abort on the first unreadable entry instead of collecting errors.
    #[builder(default = "true")]
    pub strict: bool,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub sort: Vec<(SortKey, bool)>,
    #[builder(default)]
    pub output_mode: OutputMode,
    #[builder(default)]
    pub total_row: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            count_loops: false,
            strict: true,
            format: OutputFormat::Table,
            sort: vec![],
            output_mode: OutputMode::default(),
            total_row: false,
        }
    }
}

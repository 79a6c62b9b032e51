// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::RunResult;

/// Run the declaration counting engine.
///
/// Returns a `RunResult` holding the per-file statistics and, in non-strict
/// mode, any per-file errors encountered along the way.
///
/// # Errors
///
/// Directory-level failures (`DirectoryNotFound`, `NotADirectory`) are always
/// fatal and reported before any file is processed. In strict mode the first
/// unreadable entry is fatal too; otherwise it lands in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let files = filesystem::list_dir(&config.root)?;

    if config.strict {
        let stats = files
            .iter()
            .map(|path| processor::process_file(path, config))
            .collect::<Result<Vec<_>>>()?;
        return Ok(RunResult {
            stats,
            errors: Vec::new(),
        });
    }

    let mut stats = Vec::new();
    let mut errors = Vec::new();
    for path in files {
        match processor::process_file(&path, config) {
            Ok(s) => stats.push(s),
            Err(e) => errors.push((path, e)),
        }
    }

    Ok(RunResult { stats, errors })
}

/// Count declaration lines across every file directly inside `dir`.
///
/// Convenience entry point for callers that only want the total; equivalent
/// to a strict `run` followed by `RunResult::total_declarations`.
///
/// # Errors
///
/// Fails on the first unreadable entry, or when `dir` is missing or not a
/// directory.
pub fn count_declarations(dir: impl Into<PathBuf>) -> Result<usize> {
    let config = Config {
        root: dir.into(),
        ..Config::default()
    };
    Ok(run(&config)?.total_declarations())
}

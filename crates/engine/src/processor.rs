use crate::classify::{DeclarationClassifier, LineClassifier, LoopClassifier};
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::FileStats;
use std::path::Path;

/// Process a single file and return its statistics.
///
/// The file is read fully as UTF-8 text; anything that cannot be (a
/// subdirectory, a binary file, a permission failure) surfaces uniformly as
/// `FileRead`.
pub fn process_file(path: &Path, config: &Config) -> Result<FileStats> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut stats = FileStats::new(path.to_path_buf());
    if config.count_loops {
        stats.loops = Some(0);
    }

    let declarations = DeclarationClassifier;
    let loop_openers = LoopClassifier;

    for line in content.lines() {
        stats.lines += 1;
        if declarations.matches(line) {
            stats.declarations += 1;
        }
        if let Some(loops) = stats.loops.as_mut()
            && loop_openers.matches(line)
        {
            *loops += 1;
        }
    }

    Ok(stats)
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Directory '{path}' is not accessible: {source}")]
    DirectoryNotFound {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: std::path::PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

use std::path::PathBuf;
use thiserror::Error;

/// I/O-level failures. Field-level misses never surface here; they degrade
/// to empty values inside the extractor.
#[derive(Error, Debug)]
pub enum ContixError {
    #[error("failed to read conti source {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to pack .docx archive {path}: {message}")]
    Pack { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ContixError>;

//! Error types for songprint operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, transforming or rendering songs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Song file not found: {}", path.display())]
    MissingSongFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid songbook declaration: {0}")]
    InvalidDeclaration(String),

    #[error("Render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;

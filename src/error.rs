//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a notebook document.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// The document is not valid nbformat JSON.
    #[error("invalid notebook document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The notebook file could not be read.
    #[error("cannot read notebook '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! CLI error types.

use std::path::PathBuf;

use folio_config::ConfigError;
use folio_renderer::DocumentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

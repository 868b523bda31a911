//! CLI command implementations.

pub(crate) mod block_id;
pub(crate) mod blocks;
pub(crate) mod render;
pub(crate) mod toc;

pub(crate) use block_id::BlockIdArgs;
pub(crate) use blocks::BlocksArgs;
pub(crate) use render::RenderArgs;
pub(crate) use toc::TocArgs;

use std::path::Path;

use clap::ValueEnum;
use folio_config::{Config, OutputFormat};
use folio_renderer::Document;

use crate::error::CliError;

/// Output format selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum FormatArg {
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Read and parse a document, resolving `path` against the configured source directory.
pub(crate) fn load_document(config: &Config, path: &Path) -> Result<Document, CliError> {
    let resolved = config.documents_resolved.resolve(path);
    let bytes = std::fs::read(&resolved).map_err(|source| CliError::Read {
        path: resolved.clone(),
        source,
    })?;
    let document = Document::from_slice(&bytes)?;
    tracing::info!(path = %resolved.display(), bytes = bytes.len(), "Loaded document");
    Ok(document)
}

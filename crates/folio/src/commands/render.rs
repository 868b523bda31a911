//! `folio render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use folio_config::{CliSettings, Config, EmptyBlocksPolicy, OutputFormat};
use folio_renderer::{DocumentRenderer, EmptyBlocks, to_html};

use super::{FormatArg, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Empty block policy selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum EmptyBlocksArg {
    Omit,
    Spacer,
}

impl From<EmptyBlocksArg> for EmptyBlocksPolicy {
    fn from(arg: EmptyBlocksArg) -> Self {
        match arg {
            EmptyBlocksArg::Omit => Self::Omit,
            EmptyBlocksArg::Spacer => Self::Spacer,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the serialized document (JSON).
    document: PathBuf,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to resolve document paths against (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// What to emit for visually empty blocks (overrides config).
    #[arg(long, value_enum)]
    empty_blocks: Option<EmptyBlocksArg>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the document cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            empty_blocks: self.empty_blocks.map(Into::into),
            output_format: self.format.map(Into::into),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let document = load_document(&config, &self.document)?;
        let renderer = DocumentRenderer::new().with_empty_blocks(empty_blocks(&config));
        let markup = renderer.render(&document);
        tracing::info!(nodes = markup.len(), "Rendered document");

        match config.output.format {
            OutputFormat::Html => output.result(&to_html(&markup))?,
            OutputFormat::Json => output.result(&serde_json::to_string_pretty(&markup)?)?,
        }

        Ok(())
    }
}

/// Map the configured policy onto the renderer setting.
fn empty_blocks(config: &Config) -> EmptyBlocks {
    match config.render.empty_blocks {
        EmptyBlocksPolicy::Omit => EmptyBlocks::Omit,
        EmptyBlocksPolicy::Spacer => EmptyBlocks::Spacer,
    }
}

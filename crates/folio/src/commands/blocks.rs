//! `folio blocks` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config, OutputFormat};
use folio_renderer::feedback_blocks;

use super::{FormatArg, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the blocks command.
#[derive(Args)]
pub(crate) struct BlocksArgs {
    /// Path to the serialized document (JSON).
    document: PathBuf,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to resolve document paths against (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output format; `html` prints one tab-separated line per block.
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,
}

impl BlocksArgs {
    /// Execute the blocks command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the document cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_format: self.format.map(Into::into),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let document = load_document(&config, &self.document)?;
        let blocks = feedback_blocks(&document);

        match config.output.format {
            OutputFormat::Json => output.result(&serde_json::to_string_pretty(&blocks)?)?,
            OutputFormat::Html => {
                if blocks.is_empty() {
                    output.info("No feedback blocks found");
                }
                for block in &blocks {
                    output.result(&format!("{}\t{}\t{}", block.id, block.order, block.body))?;
                }
            }
        }

        Ok(())
    }
}

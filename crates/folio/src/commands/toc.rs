//! `folio toc` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config, OutputFormat};
use folio_renderer::{TocEntry, table_of_contents};

use super::{FormatArg, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Path to the serialized document (JSON).
    document: PathBuf,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format; `html` prints an indented outline.
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the document cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_format: self.format.map(Into::into),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let document = load_document(&config, &self.document)?;
        let toc = table_of_contents(&document);

        match config.output.format {
            OutputFormat::Json => output.result(&serde_json::to_string_pretty(&toc)?)?,
            OutputFormat::Html => {
                for entry in &toc {
                    output.result(&outline_line(entry))?;
                }
            }
        }

        Ok(())
    }
}

/// Format an entry as `<indent><title> #<id>`, indenting two spaces per level.
fn outline_line(entry: &TocEntry) -> String {
    let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
    format!("{indent}{} #{}", entry.title, entry.id)
}

//! `folio block-id` command implementation.

use std::io::Read;

use clap::Args;
use folio_sections::create_feedback_block_id;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the block-id command.
#[derive(Args)]
pub(crate) struct BlockIdArgs {
    /// Block text (read from stdin when omitted).
    text: Option<String>,

    /// 1-based position of the block in its document.
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    order: f64,
}

impl BlockIdArgs {
    /// Execute the block-id command.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let text = match self.text {
            Some(text) => text,
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        output.result(&create_feedback_block_id(&text, self.order))?;
        Ok(())
    }
}

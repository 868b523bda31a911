//! Folio CLI - rich-text document renderer.
//!
//! Provides commands for:
//! - `render`: Render a serialized document to HTML or a JSON markup tree
//! - `blocks`: List the feedback anchor ids of a document's blocks
//! - `block-id`: Derive the feedback anchor id for a piece of text
//! - `toc`: Print a document's table of contents

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BlockIdArgs, BlocksArgs, RenderArgs, TocArgs};
use output::Output;

/// Folio - rich-text document renderer.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document.
    Render(RenderArgs),
    /// List feedback blocks of a document.
    Blocks(BlocksArgs),
    /// Derive the feedback block id for text.
    BlockId(BlockIdArgs),
    /// Print the table of contents of a document.
    Toc(TocArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Blocks(args) => args.execute(),
        Commands::BlockId(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

//! CLI definitions for playground-hints.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "playground-hints",
    version,
    about = "Inspect editor hints and tokens for playground sources",
    after_help = "Examples:\n  playground-hints hint src/Main.elm --line 3 --column 12\n  playground-hints tokens src/Main.elm --line 0\n  playground-hints config --root ."
)]
pub struct Cli {
    /// Directory searched for playground.toml.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the hint at a cursor position (zero-based, UTF-16 columns).
    Hint {
        /// Source file.
        file: PathBuf,
        /// Cursor line.
        #[arg(long)]
        line: u32,
        /// Cursor column.
        #[arg(long)]
        column: u32,
        /// First line after the import region; derived from the file when omitted.
        #[arg(long)]
        import_end_line: Option<u32>,
    },
    /// Print the tokens of every line, or of a single line.
    Tokens {
        /// Source file.
        file: PathBuf,
        /// Only this line.
        #[arg(long)]
        line: Option<u32>,
    },
    /// Print the effective editor configuration.
    Config,
}

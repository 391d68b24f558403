//! CLI entrypoint for playground hint inspection.

mod cli;

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use playground_ide::{resolve_hint, EditorConfig, ImportBoundary, Selection};
use playground_syntax::{Document, Position};
use tracing::{debug, info};

use cli::{Cli, Command};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("playground-hints error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = EditorConfig::load(&cli.root);
    if let Some(path) = &config.config_path {
        info!("Using config {}", path.display());
    }
    match cli.command {
        Command::Hint {
            file,
            line,
            column,
            import_end_line,
        } => {
            let document = read_document(&file)?;
            hint(&document, &config, Position::new(line, column), import_end_line)
        }
        Command::Tokens { file, line } => {
            let document = read_document(&file)?;
            tokens(&document, line)
        }
        Command::Config => {
            let mut text = toml::to_string(&config).context("failed to render config")?;
            if !text.ends_with('\n') {
                text.push('\n');
            }
            Ok(text)
        }
    }
}

fn read_document(path: &Path) -> anyhow::Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(bytes = text.len(), "read {}", path.display());
    Ok(Document::new(text))
}

fn hint(
    document: &Document,
    config: &EditorConfig,
    position: Position,
    import_end_line: Option<u32>,
) -> anyhow::Result<String> {
    check_position(document, position)?;
    let end_line = import_end_line.unwrap_or_else(|| document.import_region_end());
    debug!(end_line, "import boundary");
    if !config.hints.enabled {
        info!("Hints are disabled in the editor config");
        return Ok(String::new());
    }
    let hint = resolve_hint(
        document,
        Selection::cursor(position),
        &ImportBoundary::at(end_line),
    );
    Ok(match hint {
        Some(hint) => format!("{hint}\n"),
        None => "-\n".to_string(),
    })
}

fn tokens(document: &Document, only: Option<u32>) -> anyhow::Result<String> {
    let lines = match only {
        Some(line) if line >= document.line_count() => {
            bail!(
                "line {line} is outside the document ({} lines)",
                document.line_count()
            )
        }
        Some(line) => line..line + 1,
        None => 0..document.line_count(),
    };

    let mut output = String::new();
    for line in lines {
        let _ = write!(output, "{line}:");
        for token in document.line_tokens(line) {
            if token.syntax.is_trivia() {
                continue;
            }
            let _ = write!(
                output,
                " {:?}@{}..{} {:?}",
                token.syntax, token.start, token.end, token.text
            );
        }
        output.push('\n');
    }
    Ok(output)
}

fn check_position(document: &Document, position: Position) -> anyhow::Result<()> {
    if position.line >= document.line_count() {
        bail!(
            "line {} is outside the document ({} lines)",
            position.line,
            document.line_count()
        );
    }
    let len = document.line_len(position.line);
    if position.column > len {
        bail!(
            "column {} is past the end of line {} ({len} columns)",
            position.column,
            position.line
        );
    }
    Ok(())
}

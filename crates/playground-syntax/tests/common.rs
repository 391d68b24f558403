//! Shared helpers for lexer and document tests.
#![allow(dead_code)]

use playground_syntax::lexer::lex_with_text;
use playground_syntax::{Document, TokenKind};

/// Kinds of every non-trivia token in `source`.
pub fn non_trivia_kinds(source: &str) -> Vec<TokenKind> {
    lex_with_text(source)
        .into_iter()
        .filter(|(token, _)| !token.kind.is_trivia())
        .map(|(token, _)| token.kind)
        .collect()
}

/// One line per non-trivia token: `Kind "text"`.
pub fn dump_tokens(source: &str) -> String {
    let mut output = String::new();
    for (token, text) in lex_with_text(source) {
        if !token.kind.is_trivia() {
            output.push_str(&format!("{:?} {:?}\n", token.kind, text));
        }
    }
    output
}

/// Renders one document line as `Kind@start..end` entries.
pub fn render_line(doc: &Document, line: u32) -> String {
    doc.line_tokens(line)
        .iter()
        .map(|token| format!("{:?}@{}..{}", token.kind, token.start, token.end))
        .collect::<Vec<_>>()
        .join(" ")
}

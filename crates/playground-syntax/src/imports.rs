//! Locating the end of the module header and import declarations.

use crate::document::Document;
use crate::lexer::TokenKind;

impl Document {
    /// Returns the first line that starts a declaration other than the
    /// module header or an `import`.
    ///
    /// Lines inside the import region satisfy `line < import_region_end()`.
    /// Blank lines, comment lines, and indented continuation lines belong to
    /// whatever came before them. A buffer made only of a header and imports
    /// returns the line count.
    #[must_use]
    pub fn import_region_end(&self) -> u32 {
        for line in 0..self.line_count() {
            let mut significant = self
                .line_tokens(line)
                .iter()
                .filter(|token| !token.syntax.is_trivia());
            let Some(first) = significant.next() else {
                continue;
            };
            if first.start != 0 {
                continue;
            }
            let header = match first.syntax {
                TokenKind::KwImport | TokenKind::KwModule => true,
                TokenKind::KwPort => significant
                    .next()
                    .is_some_and(|next| next.syntax == TokenKind::KwModule),
                TokenKind::LowerIdent if first.text == "effect" => significant
                    .next()
                    .is_some_and(|next| next.syntax == TokenKind::KwModule),
                _ => false,
            };
            if !header {
                return line;
            }
        }
        self.line_count()
    }
}

/// Lexes `source` and returns [`Document::import_region_end`].
#[must_use]
pub fn import_region_end(source: &str) -> u32 {
    Document::new(source).import_region_end()
}

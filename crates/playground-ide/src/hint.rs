//! Hints for the token under the cursor.
//!
//! A hint names the semantic role of the token the cursor sits on so the hint
//! panel can show documentation for it. Identifiers are expanded into their
//! fully qualified name by walking the neighboring tokens on the same line:
//! `Html.Attributes.class` with the cursor on `class` hints
//! `"Html.Attributes.class"`. Module paths inside an `import` line are tagged
//! with [`MODULE_TAG`]. Keywords hint themselves, except for a few that
//! depend on context.
//!
//! Resolution is a pure read of the token source and the import boundary.
//! Nothing here fails: any token that does not carry a hint yields `None`.

use playground_syntax::document::utf16_column;
use playground_syntax::{LexicalKind, LineToken, Position};

use crate::imports::ImportBoundary;
use crate::source::{Selection, TokenSource};

/// Prefix marking a module path written inside an `import` declaration.
pub const MODULE_TAG: &str = "module:";

/// Resolves the hint for the current selection.
///
/// Only a plain cursor produces hints; any non-empty selection yields `None`.
pub fn resolve_hint<S>(source: &S, selection: Selection, imports: &ImportBoundary) -> Option<String>
where
    S: TokenSource + ?Sized,
{
    if !selection.is_empty() {
        return None;
    }
    let cursor = selection.head;
    let token = source.token_at(cursor);
    let resolver = HintResolver {
        source,
        line: cursor.line,
        imports,
    };
    resolver.hint_for(&token)
}

struct HintResolver<'a, S: ?Sized> {
    source: &'a S,
    line: u32,
    imports: &'a ImportBoundary,
}

impl<S: TokenSource + ?Sized> HintResolver<'_, S> {
    fn hint_for(&self, token: &LineToken) -> Option<String> {
        match token.kind {
            LexicalKind::LowerIdentifier => Some(self.lower_hint(token)),
            LexicalKind::UpperIdentifier => Some(self.upper_hint(token)),
            LexicalKind::Keyword => self.keyword_hint(token),
            LexicalKind::String | LexicalKind::Error | LexicalKind::Other => None,
        }
    }

    fn lower_hint(&self, token: &LineToken) -> String {
        let mut name = self.prefix(token);
        name.push_str(&token.text);
        name
    }

    fn upper_hint(&self, token: &LineToken) -> String {
        let mut name = self.prefix(token);
        name.push_str(&token.text);
        self.push_postfix(token, &mut name);

        if self.imports.contains(self.line)
            && names_imported_module(self.source.line_text(self.line), token.end)
        {
            return format!("{MODULE_TAG}{name}");
        }
        name
    }

    fn keyword_hint(&self, token: &LineToken) -> Option<String> {
        let hint = match token.text.as_str() {
            "." => {
                let next = self.token_after(token);
                return match next.kind {
                    LexicalKind::LowerIdentifier => Some(self.lower_hint(&next)),
                    LexicalKind::UpperIdentifier => Some(self.upper_hint(&next)),
                    _ => None,
                };
            }
            "type" if is_type_alias(self.source.line_text(self.line)) => "alias",
            "type" => "type",
            "as" if self.imports.contains(self.line) => "import",
            "as" => "as",
            other => other,
        };
        Some(hint.to_string())
    }

    /// The upper-case qualifiers written before `token`, each followed by a
    /// dot: `"A.B."` for the `c` in `A.B.c`.
    fn prefix(&self, token: &LineToken) -> String {
        let mut qualifiers = Vec::new();
        let mut current = token.clone();
        loop {
            let dot = self.token_before(&current);
            if dot.text != "." || dot.start >= current.start {
                break;
            }
            let qualifier = self.token_before(&dot);
            if qualifier.kind != LexicalKind::UpperIdentifier || qualifier.start >= dot.start {
                break;
            }
            qualifiers.push(qualifier.clone());
            current = qualifier;
        }

        let mut prefix = String::new();
        for qualifier in qualifiers.iter().rev() {
            prefix.push_str(&qualifier.text);
            prefix.push('.');
        }
        prefix
    }

    /// Appends the dotted segments written after an upper-case `token`.
    ///
    /// Upper-case segments keep the walk going; the first lower-case segment
    /// ends it. A dot followed by anything else contributes a bare `.`.
    fn push_postfix(&self, token: &LineToken, name: &mut String) {
        let mut current = token.clone();
        loop {
            let dot = self.token_after(&current);
            if dot.text != "." || dot.start < current.end {
                return;
            }
            name.push('.');
            let next = self.token_after(&dot);
            if next.start < dot.end {
                return;
            }
            match next.kind {
                LexicalKind::LowerIdentifier => {
                    name.push_str(&next.text);
                    return;
                }
                LexicalKind::UpperIdentifier => {
                    name.push_str(&next.text);
                    current = next;
                }
                _ => return,
            }
        }
    }

    fn token_before(&self, token: &LineToken) -> LineToken {
        self.source.token_at(Position::new(self.line, token.start))
    }

    // Probes one column past the end: with left-of-cursor lookups that is
    // the token starting right where `token` ends.
    fn token_after(&self, token: &LineToken) -> LineToken {
        self.source
            .token_at(Position::new(self.line, token.end.saturating_add(1)))
    }
}

/// True when `line` is an `import` declaration and a token ending at
/// `token_end` sits before its `as` or `exposing` clause.
///
/// The clauses are located by plain substring search, so `as` inside a
/// module name such as `Basics` also counts.
fn names_imported_module(line: &str, token_end: u32) -> bool {
    if !starts_with_word(line, "import") {
        return false;
    }
    ["as", "exposing"].into_iter().any(|clause| {
        line.find(clause)
            .map(|byte| utf16_column(line, byte))
            .is_some_and(|column| column > 0 && token_end < column)
    })
}

/// Matches `^type\s+alias\b`.
fn is_type_alias(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("type") else {
        return false;
    };
    let trimmed = rest.trim_start();
    trimmed.len() < rest.len() && starts_with_word(trimmed, "alias")
}

/// `text` starts with `word` followed by a word boundary.
fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|rest| !rest.starts_with(|ch: char| ch.is_ascii_alphanumeric() || ch == '_'))
}

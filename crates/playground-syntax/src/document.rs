//! Line-oriented view of a lexed buffer.
//!
//! Editors address text by `(line, column)` and ask for "the token at the
//! cursor". [`Document`] lexes the whole buffer once and slices every token
//! into per-line pieces whose columns are counted in UTF-16 code units, the
//! unit browser editors use.

use smol_str::SmolStr;

use crate::lexer::{LexicalKind, Lexer, TokenKind};

/// A cursor position: zero-based line and UTF-16 column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column in UTF-16 code units.
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// The piece of a token that lies on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    /// Coarse classification used by editor features.
    pub kind: LexicalKind,
    /// Fine-grained lexer kind.
    pub syntax: TokenKind,
    /// Token text on this line.
    pub text: SmolStr,
    /// Start column (UTF-16).
    pub start: u32,
    /// End column (UTF-16, exclusive).
    pub end: u32,
}

impl LineToken {
    /// The "no token" sentinel returned for lookups that read nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            kind: LexicalKind::Other,
            syntax: TokenKind::Whitespace,
            text: SmolStr::default(),
            start: 0,
            end: 0,
        }
    }

    /// Returns true for the sentinel and other empty pieces.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Line {
    /// Byte offset of the first character.
    start: usize,
    /// Byte offset one past the last character, excluding `\r\n`.
    end: usize,
    tokens: Vec<LineToken>,
}

/// A lexed buffer addressable by line.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    lines: Vec<Line>,
}

impl Document {
    /// Lexes `text` and splits its tokens into lines.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut offset = 0usize;
        for raw in text.split('\n') {
            let content = raw.strip_suffix('\r').unwrap_or(raw);
            lines.push(Line {
                start: offset,
                end: offset + content.len(),
                tokens: Vec::new(),
            });
            offset += raw.len() + 1;
        }

        let mut line_index = 0usize;
        for token in Lexer::new(&text) {
            let start = usize::from(token.range.start());
            let end = usize::from(token.range.end());
            while line_index + 1 < lines.len() && lines[line_index + 1].start <= start {
                line_index += 1;
            }

            let mut index = line_index;
            while index < lines.len() && lines[index].start < end {
                let line = &mut lines[index];
                let piece_start = start.max(line.start);
                let piece_end = end.min(line.end);
                if piece_start < piece_end {
                    let content = &text[line.start..line.end];
                    line.tokens.push(LineToken {
                        kind: token.kind.lexical_kind(),
                        syntax: token.kind,
                        text: SmolStr::new(&text[piece_start..piece_end]),
                        start: utf16_len(&content[..piece_start - line.start]),
                        end: utf16_len(&content[..piece_end - line.start]),
                    });
                }
                index += 1;
            }
        }

        Self { text, lines }
    }

    /// The full buffer text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines; an empty buffer has one empty line.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Text of `line` without its line terminator, or `""` when out of range.
    #[must_use]
    pub fn line_text(&self, line: u32) -> &str {
        self.lines
            .get(line as usize)
            .map_or("", |line| &self.text[line.start..line.end])
    }

    /// Tokens of `line` in order, or an empty slice when out of range.
    #[must_use]
    pub fn line_tokens(&self, line: u32) -> &[LineToken] {
        self.lines
            .get(line as usize)
            .map(|line| line.tokens.as_slice())
            .unwrap_or(&[])
    }

    /// The token an editor reports for a cursor at `position`.
    ///
    /// Tokens are read left to right until the read position reaches the
    /// column, so a cursor sitting between two tokens reports the one on its
    /// left. A column past the end reports the last token of the line. When
    /// nothing is read (column 0, empty or missing line) the result is
    /// [`LineToken::none`].
    #[must_use]
    pub fn token_at(&self, position: Position) -> LineToken {
        let mut found = None;
        if position.column > 0 {
            for token in self.line_tokens(position.line) {
                found = Some(token);
                if token.end >= position.column {
                    break;
                }
            }
        }
        found.cloned().unwrap_or_else(LineToken::none)
    }

    /// Length of `line` in UTF-16 code units.
    #[must_use]
    pub fn line_len(&self, line: u32) -> u32 {
        utf16_len(self.line_text(line))
    }

    /// Text between two columns of one line, clamped to the line like an
    /// editor's `getRange`.
    #[must_use]
    pub fn slice(&self, line: u32, start: u32, end: u32) -> &str {
        let content = self.line_text(line);
        let start = byte_offset(content, start);
        let end = byte_offset(content, end).max(start);
        &content[start..end]
    }

    /// The character right after `position`, if any.
    #[must_use]
    pub fn char_after(&self, position: Position) -> Option<char> {
        let content = self.line_text(position.line);
        content[byte_offset(content, position.column)..].chars().next()
    }
}

/// Length of `text` in UTF-16 code units.
#[must_use]
pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|ch| ch.len_utf16() as u32).sum()
}

/// Byte offset of a UTF-16 column inside a single line. Columns past the end
/// clamp to the line length; a column inside a surrogate pair clamps to the
/// start of that character.
#[must_use]
pub fn byte_offset(line: &str, column: u32) -> usize {
    let mut character = 0u32;
    for (index, ch) in line.char_indices() {
        let width = ch.len_utf16() as u32;
        if character.saturating_add(width) > column {
            return index;
        }
        character = character.saturating_add(width);
    }
    line.len()
}

/// UTF-16 column of a byte offset inside a single line.
#[must_use]
pub fn utf16_column(line: &str, byte: usize) -> u32 {
    utf16_len(&line[..byte.min(line.len())])
}

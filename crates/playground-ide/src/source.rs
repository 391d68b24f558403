//! The token source seam between editor features and the buffer.

use playground_syntax::{Document, LineToken, Position};

/// Read-only access to the tokens and lines of the buffer being edited.
///
/// `token_at` follows editor semantics: the token ending at or spanning the
/// column to the left of the position, or [`LineToken::none`] when nothing
/// was read.
pub trait TokenSource {
    /// The token at a cursor position.
    fn token_at(&self, position: Position) -> LineToken;

    /// Raw text of a line without its terminator; `""` when out of range.
    fn line_text(&self, line: u32) -> &str;
}

impl TokenSource for Document {
    fn token_at(&self, position: Position) -> LineToken {
        Document::token_at(self, position)
    }

    fn line_text(&self, line: u32) -> &str {
        Document::line_text(self, line)
    }
}

/// An editor selection. The head is where the cursor is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Position,
    /// Where the selection ends and the cursor sits.
    pub head: Position,
}

impl Selection {
    /// Creates a selection from anchor to head.
    #[must_use]
    pub const fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// An empty selection (a plain cursor) at `position`.
    #[must_use]
    pub const fn cursor(position: Position) -> Self {
        Self {
            anchor: position,
            head: position,
        }
    }

    /// Returns true when anchor and head coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The earlier end of the selection.
    #[must_use]
    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// The later end of the selection.
    #[must_use]
    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// Returns true when the anchor comes first.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.anchor <= self.head
    }

    /// Rebuilds a selection over `start..end` keeping this one's direction.
    #[must_use]
    pub fn with_bounds(&self, start: Position, end: Position) -> Self {
        if self.is_forward() {
            Self::new(start, end)
        } else {
            Self::new(end, start)
        }
    }
}

/// Sorts selections and merges the ones that overlap or touch, the way the
/// editor does before running a command on them. Duplicates collapse into
/// one. A merged selection keeps the direction of the earlier one, or of the
/// later one when the earlier is a plain cursor.
#[must_use]
pub fn normalize_selections(selections: &[Selection]) -> Vec<Selection> {
    let mut sorted = selections.to_vec();
    sorted.sort_by_key(|selection| (selection.start(), selection.end()));

    let mut merged: Vec<Selection> = Vec::with_capacity(sorted.len());
    for selection in sorted {
        let Some(previous) = merged.last_mut() else {
            merged.push(selection);
            continue;
        };
        if previous.end() < selection.start() {
            merged.push(selection);
            continue;
        }
        let start = previous.start();
        let end = previous.end().max(selection.end());
        let direction = if previous.is_empty() {
            selection
        } else {
            *previous
        };
        *previous = direction.with_bounds(start, end);
    }
    merged
}

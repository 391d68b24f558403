//! Bracket pairing, smart backspace, and indentation.
//!
//! Commands never touch the buffer. They look at the current selections and
//! return a [`KeyOutcome`]: either `Pass`, letting the editor run its
//! default key handling, or an [`EditPlan`] for the host to apply. Edit
//! ranges are in pre-edit coordinates and sorted; the planned selections are
//! in post-edit coordinates. Commands expect the selections the editor
//! hands them: sorted and merged, see
//! [`normalize_selections`](crate::source::normalize_selections). Given
//! anything else they still plan without panicking, and
//! [`EditPlan::apply`] refuses a plan whose edits overlap.

use std::collections::BTreeSet;

use playground_syntax::document::byte_offset;
use playground_syntax::{LexicalKind, Position};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::source::{Selection, TokenSource};

/// Two-character sequences that backspace removes as a unit.
const EMPTY_PAIRS: &[&str] = &["()", "{}", "[]", "\"\"", "''"];

/// Characters that may follow the cursor for an opening bracket to be
/// auto-closed. End of line also qualifies.
const PAIRABLE_BEFORE: &[char] = &[' ', '\u{b}', '\u{c}', '(', ')', '{', '}', '[', ']'];

/// Replacement of the text between two positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Start of the replaced range.
    pub start: Position,
    /// End of the replaced range; equal to `start` for insertions.
    pub end: Position,
    /// Text to put in place of the range.
    pub new_text: String,
}

impl TextEdit {
    fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            new_text: text.into(),
        }
    }

    fn delete(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            new_text: String::new(),
        }
    }
}

/// A plan that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// An edit starts before the previous one ends.
    #[error("edit at {line}:{column} overlaps the previous edit")]
    Overlapping {
        /// Line of the offending edit's start.
        line: u32,
        /// Column of the offending edit's start.
        column: u32,
    },
}

/// Edits plus the selections that result from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    /// Edits in ascending order, pre-edit coordinates.
    pub edits: Vec<TextEdit>,
    /// Selections after the edits are applied.
    pub selections: Vec<Selection>,
}

impl EditPlan {
    /// Applies the edits to `text`, the buffer the plan was made for.
    ///
    /// Edits must be sorted and may touch but not overlap; insertions at the
    /// same position land in plan order.
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        let starts = line_starts(text);
        let mut ranges = Vec::with_capacity(self.edits.len());
        let mut previous_end = 0usize;
        for edit in &self.edits {
            let start = text_offset(text, &starts, edit.start);
            let end = text_offset(text, &starts, edit.end).max(start);
            if start < previous_end {
                return Err(EditError::Overlapping {
                    line: edit.start.line,
                    column: edit.start.column,
                });
            }
            previous_end = end;
            ranges.push((start, end));
        }

        let mut result = text.to_string();
        for (edit, (start, end)) in self.edits.iter().zip(ranges).rev() {
            result.replace_range(start..end, &edit.new_text);
        }
        Ok(result)
    }
}

/// Result of a key command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; the editor should run its default behavior.
    Pass,
    /// Handled; apply the plan.
    Edit(EditPlan),
}

/// Indentation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentSettings {
    /// Width of a tab character in columns.
    pub tab_size: u32,
    /// Columns per indent step.
    pub indent_unit: u32,
    /// Emit tabs instead of spaces.
    pub indent_with_tabs: bool,
}

impl Default for IndentSettings {
    fn default() -> Self {
        Self {
            tab_size: 2,
            indent_unit: 2,
            indent_with_tabs: false,
        }
    }
}

/// Which way an indent command moves lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    /// Add one indent step.
    More,
    /// Remove up to one indent step.
    Less,
}

/// Typing an opening character such as `(` or `"`.
///
/// With only cursors, each followed by end of line, whitespace, or a
/// bracket, the pair is inserted and the cursors land inside it. With only
/// non-empty selections, each selection is wrapped. Typing `"` inside a
/// string steps over the closing quote instead. Anything else passes,
/// except for quotes, which fall back to [`close_pair`].
pub fn open_pair<S>(source: &S, selections: &[Selection], open: char, close: char) -> KeyOutcome
where
    S: TokenSource + ?Sized,
{
    if selections.is_empty() {
        return KeyOutcome::Pass;
    }

    let mut pair_count = 0usize;
    let mut surround_count = 0usize;
    for selection in selections {
        if !selection.is_empty() {
            surround_count += 1;
            continue;
        }
        let head = selection.head;
        if close == '"' {
            let token = source.token_at(head);
            if matches!(token.kind, LexicalKind::String | LexicalKind::Error) {
                return close_pair(source, selections, close);
            }
        }
        match char_after(source, head) {
            None => pair_count += 1,
            Some(next) if PAIRABLE_BEFORE.contains(&next) => pair_count += 1,
            Some(_) => {}
        }
    }

    if pair_count == selections.len() {
        insert_pairs(selections, open, close)
    } else if surround_count == selections.len() {
        surround(selections, open, close)
    } else if open == close {
        close_pair(source, selections, close)
    } else {
        KeyOutcome::Pass
    }
}

/// Typing a closing character right before the same character moves over it
/// instead of inserting a second one. Applies only when every selection is a
/// cursor sitting in front of `close`.
pub fn close_pair<S>(source: &S, selections: &[Selection], close: char) -> KeyOutcome
where
    S: TokenSource + ?Sized,
{
    if selections.is_empty() {
        return KeyOutcome::Pass;
    }
    for selection in selections {
        if !selection.is_empty() || char_after(source, selection.head) != Some(close) {
            return KeyOutcome::Pass;
        }
    }

    let width = close.len_utf16() as u32;
    let selections = sorted(selections)
        .into_iter()
        .map(|selection| {
            let head = selection.head;
            Selection::cursor(Position::new(head.line, head.column + width))
        })
        .collect();
    KeyOutcome::Edit(EditPlan {
        edits: Vec::new(),
        selections,
    })
}

/// Backspace between an empty pair such as `(|)` deletes both characters.
/// Applies only when every selection is a cursor inside an empty pair. A
/// cursor whose pair overlaps one already being deleted, as in `"|"|"`,
/// folds into the earlier cursor.
pub fn backspace<S>(source: &S, selections: &[Selection]) -> KeyOutcome
where
    S: TokenSource + ?Sized,
{
    if selections.is_empty() {
        return KeyOutcome::Pass;
    }
    for selection in selections {
        if !selection.is_empty() {
            return KeyOutcome::Pass;
        }
        let head = selection.head;
        if head.column == 0 {
            return KeyOutcome::Pass;
        }
        let around = line_slice(
            source.line_text(head.line),
            head.column - 1,
            head.column + 1,
        );
        if !EMPTY_PAIRS.contains(&around) {
            return KeyOutcome::Pass;
        }
    }

    let mut removed: FxHashMap<u32, u32> = FxHashMap::default();
    let mut edits: Vec<TextEdit> = Vec::new();
    let mut cursors = Vec::new();
    for selection in sorted(selections) {
        let head = selection.head;
        let start = Position::new(head.line, head.column - 1);
        if edits.last().is_some_and(|previous| previous.end > start) {
            continue;
        }
        edits.push(TextEdit::delete(
            start,
            Position::new(head.line, head.column + 1),
        ));
        let shift = removed.entry(head.line).or_insert(0);
        cursors.push(Selection::cursor(Position::new(
            head.line,
            start.column - *shift,
        )));
        *shift += 2;
    }
    KeyOutcome::Edit(EditPlan {
        edits,
        selections: cursors,
    })
}

/// Indents or unindents every line touched by a selection.
///
/// A multi-line selection ending at column 0 leaves its last line alone.
/// Cursors inside the leading whitespace end up at the new indentation;
/// cursors after it move with the text.
pub fn indent<S>(
    source: &S,
    selections: &[Selection],
    settings: &IndentSettings,
    direction: IndentDirection,
) -> KeyOutcome
where
    S: TokenSource + ?Sized,
{
    let mut lines = BTreeSet::new();
    for selection in selections {
        let (from, to) = (selection.start(), selection.end());
        let last = if to.column == 0 && to.line > from.line {
            to.line - 1
        } else {
            to.line
        };
        lines.extend(from.line..=last);
    }

    let tab_size = settings.tab_size.max(1);
    let mut edits = Vec::new();
    let mut changed: FxHashMap<u32, (u32, u32)> = FxHashMap::default();
    for line in lines {
        let text = source.line_text(line);
        let leading = &text[..text.len() - text.trim_start_matches([' ', '\t']).len()];
        let current = indentation_width(leading, tab_size);
        let target = match direction {
            IndentDirection::More => current + settings.indent_unit,
            IndentDirection::Less => current.saturating_sub(settings.indent_unit),
        };
        let replacement = indentation_string(target, tab_size, settings.indent_with_tabs);
        if replacement == leading {
            continue;
        }
        let old_len = leading.len() as u32;
        edits.push(TextEdit {
            start: Position::new(line, 0),
            end: Position::new(line, old_len),
            new_text: replacement.clone(),
        });
        changed.insert(line, (old_len, replacement.len() as u32));
    }

    let shift = |position: Position| match changed.get(&position.line) {
        Some(&(old_len, new_len)) if position.column <= old_len => {
            Position::new(position.line, new_len)
        }
        Some(&(old_len, new_len)) => {
            Position::new(position.line, position.column - old_len + new_len)
        }
        None => position,
    };
    let selections = sorted(selections)
        .into_iter()
        .map(|selection| Selection::new(shift(selection.anchor), shift(selection.head)))
        .collect();
    KeyOutcome::Edit(EditPlan { edits, selections })
}

fn insert_pairs(selections: &[Selection], open: char, close: char) -> KeyOutcome {
    let open_width = open.len_utf16() as u32;
    let close_width = close.len_utf16() as u32;
    let text: String = [open, close].iter().collect();

    let mut inserted: FxHashMap<u32, u32> = FxHashMap::default();
    let mut edits = Vec::new();
    let mut cursors = Vec::new();
    for selection in sorted(selections) {
        let at = selection.head;
        edits.push(TextEdit::insert(at, text.clone()));
        let shift = inserted.entry(at.line).or_insert(0);
        cursors.push(Selection::cursor(Position::new(
            at.line,
            at.column + *shift + open_width,
        )));
        *shift += open_width + close_width;
    }
    KeyOutcome::Edit(EditPlan {
        edits,
        selections: cursors,
    })
}

fn surround(selections: &[Selection], open: char, close: char) -> KeyOutcome {
    let open_width = open.len_utf16() as u32;
    let close_width = close.len_utf16() as u32;

    let mut inserted: FxHashMap<u32, u32> = FxHashMap::default();
    let mut edits = Vec::new();
    let mut wrapped = Vec::new();
    for selection in sorted(selections) {
        let (from, to) = (selection.start(), selection.end());
        edits.push(TextEdit::insert(from, open));
        edits.push(TextEdit::insert(to, close));

        let from_shift = inserted.entry(from.line).or_insert(0);
        *from_shift += open_width;
        let new_from = Position::new(from.line, from.column + *from_shift);

        let to_shift = inserted.entry(to.line).or_insert(0);
        let new_to = Position::new(to.line, to.column + *to_shift);
        *to_shift += close_width;

        wrapped.push(selection.with_bounds(new_from, new_to));
    }
    KeyOutcome::Edit(EditPlan {
        edits,
        selections: wrapped,
    })
}

fn sorted(selections: &[Selection]) -> Vec<Selection> {
    let mut sorted = selections.to_vec();
    sorted.sort_by_key(Selection::start);
    sorted
}

fn char_after<S>(source: &S, position: Position) -> Option<char>
where
    S: TokenSource + ?Sized,
{
    let line = source.line_text(position.line);
    line[byte_offset(line, position.column)..].chars().next()
}

fn line_slice(line: &str, start: u32, end: u32) -> &str {
    let start = byte_offset(line, start);
    let end = byte_offset(line, end).max(start);
    &line[start..end]
}

fn indentation_width(leading: &str, tab_size: u32) -> u32 {
    leading.chars().fold(0, |column, ch| {
        if ch == '\t' {
            column + tab_size - column % tab_size
        } else {
            column + 1
        }
    })
}

fn indentation_string(width: u32, tab_size: u32, with_tabs: bool) -> String {
    if with_tabs {
        let mut indentation = "\t".repeat((width / tab_size) as usize);
        indentation.push_str(&" ".repeat((width % tab_size) as usize));
        indentation
    } else {
        " ".repeat(width as usize)
    }
}

fn line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(index, _)| index + 1))
        .collect()
}

fn text_offset(text: &str, starts: &[usize], position: Position) -> usize {
    let Some(&start) = starts.get(position.line as usize) else {
        return text.len();
    };
    let end = text[start..].find('\n').map_or(text.len(), |index| start + index);
    let line = text[start..end].strip_suffix('\r').unwrap_or(&text[start..end]);
    start + byte_offset(line, position.column)
}

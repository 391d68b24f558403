//! The editor session: buffer, import boundary, theme, and hint delivery.

use playground_ide::{
    binding_for, normalize_selections, resolve_hint, EditError, EditPlan, EditorConfig, HintSink,
    ImportBoundary, KeyBinding, KeyOutcome, QueuedHints, Selection, Theme,
};
use playground_syntax::{Document, Position};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The key name is not bound by the editor.
    #[error("unknown key '{0}'")]
    UnknownKey(String),

    /// A selection endpoint lies outside the buffer.
    #[error("position {line}:{column} is outside the document")]
    PositionOutOfRange { line: u32, column: u32 },

    /// A request could not be decoded.
    #[error("invalid {what} json: {message}")]
    InvalidJson { what: &'static str, message: String },

    /// A planned edit could not be applied to the buffer.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// A response could not be encoded.
    #[error("json serialization failed: {0}")]
    Serialize(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Source handed to the host for form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub source: String,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// The editor should run its default key handling.
    Pass,
    /// The session applied an edit plan to its buffer.
    Edited(EditPlan),
    /// The source was compiled.
    Compiled(Submission),
}

/// One editor instance.
///
/// The hint sink stays empty until the hint subsystem has loaded; until then
/// cursor moves are not resolved at all.
#[derive(Debug)]
pub struct EditorSession<K = QueuedHints> {
    config: EditorConfig,
    document: Document,
    imports: ImportBoundary,
    theme: Theme,
    hints: Option<K>,
}

impl<K: HintSink> EditorSession<K> {
    pub fn new(config: EditorConfig) -> Self {
        let theme = config.editor.theme;
        Self {
            config,
            document: Document::new(String::new()),
            imports: ImportBoundary::new(),
            theme,
            hints: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn source(&self) -> &str {
        self.document.text()
    }

    /// Replaces the buffer contents.
    pub fn set_source(&mut self, text: impl Into<String>) {
        self.document = Document::new(text);
        if self.config.hints.derive_import_boundary {
            self.imports.update(self.document.import_region_end());
        }
    }

    /// Connects the hint subsystem.
    pub fn attach_hints(&mut self, sink: K) {
        debug!("hint subsystem attached");
        self.hints = Some(sink);
    }

    pub fn hints_attached(&self) -> bool {
        self.hints.is_some()
    }

    pub fn hints_mut(&mut self) -> Option<&mut K> {
        self.hints.as_mut()
    }

    /// Boundary update reported by the hint subsystem.
    pub fn update_import_end_line(&mut self, end_line: u32) {
        self.imports.update(end_line);
    }

    pub fn import_boundary(&self) -> ImportBoundary {
        self.imports
    }

    /// Resolves the hint for `selection` without delivering it.
    pub fn hint_at(&self, selection: Selection) -> Option<String> {
        resolve_hint(&self.document, selection, &self.imports)
    }

    /// Cursor-activity handler: resolves the hint and forwards it to the
    /// hint subsystem. Returns the delivered hint; nothing is resolved or
    /// delivered while the subsystem is absent or hints are disabled.
    pub fn cursor_moved(&mut self, selection: Selection) -> Option<String> {
        if !self.config.hints.enabled {
            return None;
        }
        if self.hints.is_none() {
            trace!("cursor moved before the hint subsystem loaded");
            return None;
        }
        let hint = self.hint_at(selection);
        if let Some(sink) = self.hints.as_mut() {
            sink.cursor_moved(hint.as_deref());
        }
        hint
    }

    /// Submits the current source: returned for the host's form post and
    /// forwarded to the hint subsystem when it is attached.
    pub fn compile(&mut self) -> Submission {
        let source = self.document.text().to_string();
        debug!(bytes = source.len(), "compile requested");
        if let Some(sink) = self.hints.as_mut() {
            sink.source_submitted(&source);
        }
        Submission { source }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches between the dark and light themes.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Runs the command bound to `key`. Selections are sorted and merged
    /// first, so duplicate or overlapping cursors act once. Edit plans are
    /// applied to the session's buffer before they are returned.
    pub fn handle_key(&mut self, key: &str, selections: &[Selection]) -> SessionResult<KeyResponse> {
        let binding = binding_for(key).ok_or_else(|| SessionError::UnknownKey(key.to_string()))?;
        let command = match binding {
            KeyBinding::Compile => return Ok(KeyResponse::Compiled(self.compile())),
            KeyBinding::Edit(command) => command,
        };
        for selection in selections {
            self.check_position(selection.anchor)?;
            self.check_position(selection.head)?;
        }

        let selections = normalize_selections(selections);
        let indent = self.config.indent_settings();
        match command.run(&self.document, &selections, &indent) {
            KeyOutcome::Pass => Ok(KeyResponse::Pass),
            KeyOutcome::Edit(plan) => {
                if !plan.edits.is_empty() {
                    let text = plan.apply(self.document.text())?;
                    self.set_source(text);
                }
                Ok(KeyResponse::Edited(plan))
            }
        }
    }

    fn check_position(&self, position: Position) -> SessionResult<()> {
        if position.line < self.document.line_count()
            && position.column <= self.document.line_len(position.line)
        {
            Ok(())
        } else {
            Err(SessionError::PositionOutOfRange {
                line: position.line,
                column: position.column,
            })
        }
    }
}

impl<K: HintSink> Default for EditorSession<K> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_ide::HintMessage;

    fn cursor(line: u32, column: u32) -> Selection {
        Selection::cursor(Position::new(line, column))
    }

    #[test]
    fn cursor_moves_are_ignored_until_hints_attach() {
        let mut session: EditorSession = EditorSession::default();
        session.set_source("main = Html.text \"hi\"");
        assert_eq!(session.cursor_moved(cursor(0, 10)), None);

        session.attach_hints(QueuedHints::new());
        assert_eq!(
            session.cursor_moved(cursor(0, 10)).as_deref(),
            Some("Html.text")
        );
        let messages = session.hints_mut().map(QueuedHints::drain).unwrap_or_default();
        assert_eq!(
            messages,
            vec![HintMessage::CursorMoved {
                hint: Some("Html.text".to_string())
            }]
        );
    }

    #[test]
    fn disabled_hints_never_fire() {
        let mut config = EditorConfig::default();
        config.hints.enabled = false;
        let mut session: EditorSession = EditorSession::new(config);
        session.attach_hints(QueuedHints::new());
        session.set_source("main = 1");
        assert_eq!(session.cursor_moved(cursor(0, 2)), None);
        assert!(session.hints_mut().is_some_and(|queue| queue.is_empty()));
    }

    #[test]
    fn out_of_range_selection_is_rejected_for_edits() {
        let mut session: EditorSession = EditorSession::default();
        session.set_source("x");
        assert_eq!(
            session.handle_key("Backspace", &[cursor(0, 5)]),
            Err(SessionError::PositionOutOfRange { line: 0, column: 5 })
        );
        assert_eq!(
            session.handle_key("F5", &[cursor(0, 0)]),
            Err(SessionError::UnknownKey("F5".to_string()))
        );
    }

    #[test]
    fn repeated_cursors_edit_once() {
        let mut session: EditorSession = EditorSession::default();
        session.set_source("f ()x");
        let response = session
            .handle_key("Backspace", &[cursor(0, 3), cursor(0, 3)])
            .expect("backspace");
        let KeyResponse::Edited(plan) = response else {
            panic!("expected an edit, got {response:?}");
        };
        assert_eq!(plan.edits.len(), 1);
        assert_eq!(plan.selections, vec![cursor(0, 2)]);
        assert_eq!(session.source(), "f x");
    }
}

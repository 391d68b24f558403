//! Browser/WASM adapter for the playground editor.
//!
//! [`EditorSession`] is the native API. [`WasmEditorSession`] wraps it with
//! JSON-in / JSON-out methods for the page script; those are exported through
//! `wasm-bindgen` when the `wasm` feature is enabled on a wasm32 target.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

mod session;

pub use session::{EditorSession, KeyResponse, SessionError, SessionResult, Submission};

use playground_ide::{EditorConfig, EditPlan, QueuedHints, Selection, TextEdit};
use serde::{Deserialize, Serialize};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::wasm_bindgen;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionInput {
    pub anchor: Position,
    pub head: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyRequest {
    pub key: String,
    pub selections: Vec<SelectionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextEditItem {
    pub range: Range,
    pub new_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KeyResponseItem {
    Pass,
    Edit {
        edits: Vec<TextEditItem>,
        selections: Vec<SelectionInput>,
    },
    Compile {
        source: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HintItem {
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionItem {
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStatus {
    pub line_count: u32,
    pub import_end_line: u32,
    pub theme: String,
    pub hints_attached: bool,
}

impl From<Position> for playground_syntax::Position {
    fn from(value: Position) -> Self {
        playground_syntax::Position::new(value.line, value.column)
    }
}

impl From<playground_syntax::Position> for Position {
    fn from(value: playground_syntax::Position) -> Self {
        Self {
            line: value.line,
            column: value.column,
        }
    }
}

impl From<SelectionInput> for Selection {
    fn from(value: SelectionInput) -> Self {
        Selection::new(value.anchor.into(), value.head.into())
    }
}

impl From<Selection> for SelectionInput {
    fn from(value: Selection) -> Self {
        Self {
            anchor: value.anchor.into(),
            head: value.head.into(),
        }
    }
}

impl From<TextEdit> for TextEditItem {
    fn from(value: TextEdit) -> Self {
        Self {
            range: Range {
                start: value.start.into(),
                end: value.end.into(),
            },
            new_text: value.new_text,
        }
    }
}

impl From<KeyResponse> for KeyResponseItem {
    fn from(value: KeyResponse) -> Self {
        match value {
            KeyResponse::Pass => KeyResponseItem::Pass,
            KeyResponse::Edited(EditPlan { edits, selections }) => KeyResponseItem::Edit {
                edits: edits.into_iter().map(TextEditItem::from).collect(),
                selections: selections.into_iter().map(SelectionInput::from).collect(),
            },
            KeyResponse::Compiled(submission) => KeyResponseItem::Compile {
                source: submission.source,
            },
        }
    }
}

#[cfg_attr(all(target_arch = "wasm32", feature = "wasm"), wasm_bindgen)]
pub struct WasmEditorSession {
    inner: EditorSession<QueuedHints>,
}

#[cfg_attr(all(target_arch = "wasm32", feature = "wasm"), wasm_bindgen)]
impl WasmEditorSession {
    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(constructor)
    )]
    pub fn new() -> Self {
        Self {
            inner: EditorSession::default(),
        }
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = fromConfigToml)
    )]
    pub fn from_config_toml(contents: &str) -> Self {
        Self {
            inner: EditorSession::new(EditorConfig::from_contents(None, contents)),
        }
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = setSource)
    )]
    pub fn set_source(&mut self, text: &str) {
        self.inner.set_source(text);
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = sourceText)
    )]
    pub fn source_text(&self) -> String {
        self.inner.source().to_string()
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = attachHints)
    )]
    pub fn attach_hints(&mut self) {
        self.inner.attach_hints(QueuedHints::new());
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = updateImportEndLine)
    )]
    pub fn update_import_end_line(&mut self, end_line: u32) {
        self.inner.update_import_end_line(end_line);
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = cursorMovedJson)
    )]
    pub fn cursor_moved_json(&mut self, selection_json: &str) -> Result<String, String> {
        let selection = parse_json::<SelectionInput>("selection", selection_json)?;
        let hint = self.inner.cursor_moved(selection.into());
        json_string(&HintItem { hint })
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = hintAtJson)
    )]
    pub fn hint_at_json(&self, selection_json: &str) -> Result<String, String> {
        let selection = parse_json::<SelectionInput>("selection", selection_json)?;
        let hint = self.inner.hint_at(selection.into());
        json_string(&HintItem { hint })
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = handleKeyJson)
    )]
    pub fn handle_key_json(&mut self, request_json: &str) -> Result<String, String> {
        let request = parse_json::<KeyRequest>("key request", request_json)?;
        let selections: Vec<Selection> = request
            .selections
            .into_iter()
            .map(Into::into)
            .collect();
        let response = self.inner.handle_key(&request.key, &selections)?;
        json_string(&KeyResponseItem::from(response))
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = compileJson)
    )]
    pub fn compile_json(&mut self) -> Result<String, String> {
        let submission = self.inner.compile();
        json_string(&SubmissionItem {
            source: submission.source,
        })
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = toggleTheme)
    )]
    pub fn toggle_theme(&mut self) -> String {
        self.inner.toggle_theme().as_str().to_string()
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = drainHintMessagesJson)
    )]
    pub fn drain_hint_messages_json(&mut self) -> Result<String, String> {
        let messages = self
            .inner
            .hints_mut()
            .map(QueuedHints::drain)
            .unwrap_or_default();
        json_string(&messages)
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = statusJson)
    )]
    pub fn status_json(&self) -> Result<String, String> {
        json_string(&self.status())
    }
}

impl WasmEditorSession {
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            line_count: self.inner.document().line_count(),
            import_end_line: self.inner.import_boundary().end_line(),
            theme: self.inner.theme().as_str().to_string(),
            hints_attached: self.inner.hints_attached(),
        }
    }
}

impl Default for WasmEditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SessionError> for String {
    fn from(value: SessionError) -> Self {
        value.to_string()
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(what: &'static str, json: &str) -> SessionResult<T> {
    serde_json::from_str(json).map_err(|err| SessionError::InvalidJson {
        what,
        message: err.to_string(),
    })
}

fn json_string<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| SessionError::Serialize(err.to_string()).into())
}

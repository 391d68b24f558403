//! Key bindings the editor overrides.

use crate::editing::{self, IndentDirection, IndentSettings, KeyOutcome};
use crate::source::{Selection, TokenSource};

/// Key names bound by the editor, in the editor's key-name syntax.
pub const BOUND_KEYS: &[&str] = &[
    "'\\''", "'\"'", "'('", "'{'", "'['", "')'", "'}'", "']'", "Tab", "Shift-Tab", "Backspace",
    "Ctrl-Enter",
];

/// An editing command triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Typing an opening character.
    Open {
        /// The typed character.
        open: char,
        /// The character that closes it.
        close: char,
    },
    /// Typing a closing character.
    Close(char),
    /// `Tab`.
    IndentMore,
    /// `Shift-Tab`.
    IndentLess,
    /// `Backspace`.
    Backspace,
}

impl EditCommand {
    /// Plans the command against the current selections.
    pub fn run<S>(self, source: &S, selections: &[Selection], indent: &IndentSettings) -> KeyOutcome
    where
        S: TokenSource + ?Sized,
    {
        match self {
            EditCommand::Open { open, close } => editing::open_pair(source, selections, open, close),
            EditCommand::Close(close) => editing::close_pair(source, selections, close),
            EditCommand::IndentMore => {
                editing::indent(source, selections, indent, IndentDirection::More)
            }
            EditCommand::IndentLess => {
                editing::indent(source, selections, indent, IndentDirection::Less)
            }
            EditCommand::Backspace => editing::backspace(source, selections),
        }
    }
}

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Run an editing command.
    Edit(EditCommand),
    /// Submit the source for compilation.
    Compile,
}

/// Looks up a key by name. Character keys are accepted both quoted, as the
/// editor reports them (`'('`), and bare (`(`).
#[must_use]
pub fn binding_for(name: &str) -> Option<KeyBinding> {
    let key = name
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(name);

    let command = match key {
        "'" | "\\'" => EditCommand::Open {
            open: '\'',
            close: '\'',
        },
        "\"" => EditCommand::Open {
            open: '"',
            close: '"',
        },
        "(" => EditCommand::Open {
            open: '(',
            close: ')',
        },
        "{" => EditCommand::Open {
            open: '{',
            close: '}',
        },
        "[" => EditCommand::Open {
            open: '[',
            close: ']',
        },
        ")" => EditCommand::Close(')'),
        "}" => EditCommand::Close('}'),
        "]" => EditCommand::Close(']'),
        "Tab" => EditCommand::IndentMore,
        "Shift-Tab" => EditCommand::IndentLess,
        "Backspace" => EditCommand::Backspace,
        "Ctrl-Enter" => return Some(KeyBinding::Compile),
        _ => return None,
    };
    Some(KeyBinding::Edit(command))
}

//! `playground-ide` - Editor features for the playground language.
//!
//! - **Hints**: The semantic role of the token under the cursor, with
//!   qualified names expanded
//! - **Import boundary**: Where `import` syntax stops applying
//! - **Editing**: Bracket pairing, smart backspace, indentation
//! - **Key map**: The keys the editor overrides
//! - **Configuration**: `playground.toml`
//!
//! # Architecture
//!
//! Features are pure functions over a [`TokenSource`] and the current
//! selections. They never mutate the buffer; editing commands return plans
//! for the host to apply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod editing;
pub mod hint;
pub mod imports;
pub mod keymap;
pub mod sink;
pub mod source;

pub use config::{EditorConfig, Theme};
pub use editing::{EditError, EditPlan, IndentDirection, IndentSettings, KeyOutcome, TextEdit};
pub use hint::{resolve_hint, MODULE_TAG};
pub use imports::ImportBoundary;
pub use keymap::{binding_for, EditCommand, KeyBinding};
pub use sink::{HintMessage, HintSink, QueuedHints};
pub use source::{normalize_selections, Selection, TokenSource};

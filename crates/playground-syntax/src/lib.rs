//! `playground-syntax` - Lexer and per-line token model for the playground
//! language editor.
//!
//! - **Lexer**: Tokenizes source text into a lossless stream of tokens
//! - **Document**: Splits those tokens into lines addressable by
//!   `(line, column)`, the way a browser editor reports them
//! - **Import region**: Finds where the module header and imports end
//!
//! # Example
//!
//! ```
//! use playground_syntax::{Document, LexicalKind, Position};
//!
//! let doc = Document::new("main = Html.text \"hi\"");
//! let token = doc.token_at(Position::new(0, 11));
//!
//! assert_eq!(token.text, "Html");
//! assert_eq!(token.kind, LexicalKind::UpperIdentifier);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod imports;
pub mod lexer;

pub use document::{Document, LineToken, Position};
pub use imports::import_region_end;
pub use lexer::{lex, LexicalKind, Lexer, Token, TokenKind};

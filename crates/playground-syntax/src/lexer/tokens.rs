//! Token definitions for the playground language.
//!
//! The token kinds are fine grained so the lexer can be tested precisely.
//! Editor features only look at the coarse [`LexicalKind`] a kind maps to.

use logos::Logos;

/// Block comments `{- ... -}` nest. An unterminated comment runs to the end
/// of the source and is still a comment.
fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let mut depth = 1usize;
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'-' {
            depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == b'-' && bytes[i + 1] == b'}' {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return true;
            }
            continue;
        }
        i += 1;
    }

    lex.bump(bytes.len());
    true
}

/// Triple-quoted strings may span lines. Without a closing `"""` the token
/// becomes an error that swallows the rest of the source.
fn lex_multiline_string(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' if bytes[i..].starts_with(b"\"\"\"") => {
                lex.bump(i + 3);
                return true;
            }
            _ => i += 1,
        }
    }

    lex.bump(bytes.len());
    false
}

/// All token kinds of the playground language.
///
/// Kinds are grouped as:
/// - Trivia (whitespace, comments)
/// - Punctuation
/// - Operators (any run of symbol characters, including `.`)
/// - Keywords (reserved words)
/// - Identifiers and literals
/// - Errors (unterminated literals, unknown characters)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Single-line comment: `-- ...`
    #[regex(r"--[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment: `{- ... -}` (supports nesting)
    #[token("{-", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `,`
    #[token(",")]
    Comma,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `` ` ``
    #[token("`")]
    Backtick,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// A run of symbol characters: `.`, `->`, `|>`, `==`, `::`, `\` ...
    #[regex(r"[-!#$%&*+./<=>?@\\^|~:]+")]
    Operator,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `alias`
    #[token("alias")]
    KwAlias,

    /// `as`
    #[token("as")]
    KwAs,

    /// `case`
    #[token("case")]
    KwCase,

    /// `else`
    #[token("else")]
    KwElse,

    /// `exposing`
    #[token("exposing")]
    KwExposing,

    /// `if`
    #[token("if")]
    KwIf,

    /// `import`
    #[token("import")]
    KwImport,

    /// `in`
    #[token("in")]
    KwIn,

    /// `infix`
    #[token("infix")]
    KwInfix,

    /// `let`
    #[token("let")]
    KwLet,

    /// `module`
    #[token("module")]
    KwModule,

    /// `of`
    #[token("of")]
    KwOf,

    /// `port`
    #[token("port")]
    KwPort,

    /// `then`
    #[token("then")]
    KwThen,

    /// `type`
    #[token("type")]
    KwType,

    /// `where`
    #[token("where")]
    KwWhere,

    // =========================================================================
    // IDENTIFIERS & LITERALS
    // =========================================================================
    /// Lower-case identifier: values, functions, fields, type variables
    #[regex(r"[a-z_][A-Za-z0-9_]*")]
    LowerIdent,

    /// Upper-case identifier: types, constructors, module path segments
    #[regex(r"[A-Z][A-Za-z0-9_]*")]
    UpperIdent,

    /// Number literal. A trailing `.` is split off by the lexer.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"0x[0-9A-Fa-f]*")]
    Number,

    /// `"..."`
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    String,

    /// `"""..."""`
    #[token("\"\"\"", lex_multiline_string)]
    MultilineString,

    /// `'c'`
    #[regex(r"'([^'\\\r\n]|\\.)*'")]
    Char,

    /// A string literal missing its closing quote before end of line
    #[regex(r#""([^"\\\r\n]|\\.)*"#)]
    UnterminatedString,

    /// A character literal missing its closing quote before end of line
    #[regex(r"'([^'\\\r\n]|\\.)*")]
    UnterminatedChar,

    /// Anything the lexer does not recognize
    #[default]
    Error,
}

/// The coarse classification editor features dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalKind {
    /// Lower-case identifier.
    LowerIdentifier,
    /// Upper-case identifier or module path segment.
    UpperIdentifier,
    /// Reserved word or operator.
    Keyword,
    /// String or character literal.
    String,
    /// Unterminated literal or unknown input.
    Error,
    /// Everything else: whitespace, comments, punctuation, numbers.
    Other,
}

impl TokenKind {
    /// Returns true for whitespace and comments.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Returns true for reserved words.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwAlias
                | TokenKind::KwAs
                | TokenKind::KwCase
                | TokenKind::KwElse
                | TokenKind::KwExposing
                | TokenKind::KwIf
                | TokenKind::KwImport
                | TokenKind::KwIn
                | TokenKind::KwInfix
                | TokenKind::KwLet
                | TokenKind::KwModule
                | TokenKind::KwOf
                | TokenKind::KwPort
                | TokenKind::KwThen
                | TokenKind::KwType
                | TokenKind::KwWhere
        )
    }

    /// Maps the token kind onto the categories editor features work with.
    /// Operators count as keywords, so a lone `.` classifies as a keyword.
    #[must_use]
    pub fn lexical_kind(self) -> LexicalKind {
        match self {
            TokenKind::LowerIdent => LexicalKind::LowerIdentifier,
            TokenKind::UpperIdent => LexicalKind::UpperIdentifier,
            TokenKind::Operator => LexicalKind::Keyword,
            kind if kind.is_keyword() => LexicalKind::Keyword,
            TokenKind::String | TokenKind::MultilineString | TokenKind::Char => {
                LexicalKind::String
            }
            TokenKind::UnterminatedString | TokenKind::UnterminatedChar | TokenKind::Error => {
                LexicalKind::Error
            }
            _ => LexicalKind::Other,
        }
    }
}

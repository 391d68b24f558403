mod common;
use common::*;

use expect_test::expect;
use playground_syntax::lexer::lex_with_text;
use playground_syntax::{LexicalKind, TokenKind};

#[test]
fn import_declaration() {
    let actual = dump_tokens("import Html.Attributes as A exposing (..)");
    expect![[r#"
        KwImport "import"
        UpperIdent "Html"
        Operator "."
        UpperIdent "Attributes"
        KwAs "as"
        UpperIdent "A"
        KwExposing "exposing"
        LParen "("
        Operator ".."
        RParen ")"
    "#]]
    .assert_eq(&actual);
}

#[test]
fn comments_are_trivia() {
    let source = "x -- line\n{- outer {- inner -} outer -}\ny";
    let kinds: Vec<_> = lex_with_text(source)
        .into_iter()
        .map(|(token, _)| token.kind)
        .collect();
    assert!(kinds.contains(&TokenKind::LineComment));
    assert_eq!(
        kinds
            .iter()
            .filter(|kind| **kind == TokenKind::BlockComment)
            .count(),
        1
    );
    assert_eq!(
        non_trivia_kinds(source),
        vec![TokenKind::LowerIdent, TokenKind::LowerIdent]
    );
}

#[test]
fn operator_runs_and_keywords() {
    assert_eq!(
        non_trivia_kinds("\\x -> x |> f"),
        vec![
            TokenKind::Operator,
            TokenKind::LowerIdent,
            TokenKind::Operator,
            TokenKind::LowerIdent,
            TokenKind::Operator,
            TokenKind::LowerIdent,
        ]
    );
    assert_eq!(
        non_trivia_kinds("type alias Model = {}"),
        vec![
            TokenKind::KwType,
            TokenKind::KwAlias,
            TokenKind::UpperIdent,
            TokenKind::Operator,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ]
    );
    // Keyword prefixes stay identifiers.
    assert_eq!(non_trivia_kinds("assert"), vec![TokenKind::LowerIdent]);
}

#[test]
fn string_literals() {
    let tokens = lex_with_text(r#"a "done" 'c' "open"#);
    let classified: Vec<_> = tokens
        .iter()
        .filter(|(token, _)| !token.kind.is_trivia())
        .map(|(token, text)| (token.kind.lexical_kind(), *text))
        .collect();
    assert_eq!(
        classified,
        vec![
            (LexicalKind::LowerIdentifier, "a"),
            (LexicalKind::String, "\"done\""),
            (LexicalKind::String, "'c'"),
            (LexicalKind::Error, "\"open"),
        ]
    );
}

#[test]
fn multiline_strings() {
    let source = "s = \"\"\"one\ntwo\"\"\" ++ t";
    assert_eq!(
        non_trivia_kinds(source),
        vec![
            TokenKind::LowerIdent,
            TokenKind::Operator,
            TokenKind::MultilineString,
            TokenKind::Operator,
            TokenKind::LowerIdent,
        ]
    );

    let unterminated = non_trivia_kinds("s = \"\"\"never closed");
    assert_eq!(unterminated.last(), Some(&TokenKind::Error));
}

#[test]
fn unknown_characters_are_errors() {
    let tokens = lex_with_text("x = å");
    assert!(tokens
        .iter()
        .any(|(token, _)| token.kind == TokenKind::Error));
}

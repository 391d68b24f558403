mod common;
use common::*;

use playground_syntax::{Document, LexicalKind, Position};

#[test]
fn tokens_cover_every_column() {
    let doc = Document::new("view model =\n  Html.div [] []");
    insta::assert_snapshot!(
        render_line(&doc, 1),
        @"Other@0..2 UpperIdentifier@2..6 Keyword@6..7 LowerIdentifier@7..10 Other@10..11 Other@11..12 Other@12..13 Other@13..14 Other@14..15 Other@15..16"
    );
}

#[test]
fn cursor_between_tokens_reports_left_token() {
    let doc = Document::new("List.map f xs");
    let token = doc.token_at(Position::new(0, 4));
    assert_eq!(token.text, "List");
    assert_eq!(token.kind, LexicalKind::UpperIdentifier);

    let token = doc.token_at(Position::new(0, 5));
    assert_eq!(token.text, ".");
    assert_eq!(token.kind, LexicalKind::Keyword);
}

#[test]
fn probing_one_past_a_token_end_finds_its_neighbor() {
    let doc = Document::new("A.B");
    let first = doc.token_at(Position::new(0, 1));
    let dot = doc.token_at(Position::new(0, first.end + 1));
    assert_eq!(dot.text, ".");
    let second = doc.token_at(Position::new(0, dot.end + 1));
    assert_eq!(second.text, "B");
    // Past the end of the line the last token comes back again.
    let after = doc.token_at(Position::new(0, second.end + 1));
    assert_eq!(after, second);
}

#[test]
fn empty_lines_have_no_tokens() {
    let doc = Document::new("a\n\nb");
    assert!(doc.line_tokens(1).is_empty());
    assert!(doc.token_at(Position::new(1, 3)).is_none());
    assert_eq!(doc.import_region_end(), 0);
}

//! Bracket pairing, backspace, and indentation commands.

use playground_ide::editing::{backspace, close_pair, indent, open_pair};
use playground_ide::{
    binding_for, EditCommand, EditPlan, IndentDirection, IndentSettings, KeyBinding, KeyOutcome,
    Selection,
};
use playground_syntax::{Document, Position};

fn cursor(line: u32, column: u32) -> Selection {
    Selection::cursor(Position::new(line, column))
}

fn range(anchor: (u32, u32), head: (u32, u32)) -> Selection {
    Selection::new(
        Position::new(anchor.0, anchor.1),
        Position::new(head.0, head.1),
    )
}

fn apply(plan: &EditPlan, doc: &Document) -> String {
    plan.apply(doc.text()).expect("plan applies")
}

fn expect_plan(outcome: KeyOutcome) -> EditPlan {
    match outcome {
        KeyOutcome::Edit(plan) => plan,
        KeyOutcome::Pass => panic!("expected an edit plan, got Pass"),
    }
}

// =============================================================================
// Opening characters
// =============================================================================

#[test]
fn open_at_end_of_line_inserts_pair() {
    let doc = Document::new("f x =");
    let plan = expect_plan(open_pair(&doc, &[cursor(0, 5)], '(', ')'));
    assert_eq!(apply(&plan, &doc), "f x =()");
    assert_eq!(plan.selections, vec![cursor(0, 6)]);
}

#[test]
fn open_before_closing_bracket_inserts_pair() {
    let doc = Document::new("[]");
    let plan = expect_plan(open_pair(&doc, &[cursor(0, 1)], '{', '}'));
    assert_eq!(apply(&plan, &doc), "[{}]");
    assert_eq!(plan.selections, vec![cursor(0, 2)]);
}

#[test]
fn open_before_word_passes() {
    let doc = Document::new("map");
    assert_eq!(open_pair(&doc, &[cursor(0, 0)], '(', ')'), KeyOutcome::Pass);
}

#[test]
fn open_with_several_cursors_on_one_line() {
    let doc = Document::new("a  b ");
    let plan = expect_plan(open_pair(&doc, &[cursor(0, 2), cursor(0, 1)], '[', ']'));
    assert_eq!(apply(&plan, &doc), "a[] [] b ");
    assert_eq!(plan.selections, vec![cursor(0, 2), cursor(0, 5)]);
}

#[test]
fn open_wraps_selection_keeping_direction() {
    let doc = Document::new("f x y");
    let forward = expect_plan(open_pair(&doc, &[range((0, 2), (0, 5))], '(', ')'));
    assert_eq!(apply(&forward, &doc), "f (x y)");
    assert_eq!(forward.selections, vec![range((0, 3), (0, 6))]);

    let backward = expect_plan(open_pair(&doc, &[range((0, 5), (0, 2))], '(', ')'));
    assert_eq!(backward.selections, vec![range((0, 6), (0, 3))]);
}

#[test]
fn open_wraps_multi_line_selection() {
    let doc = Document::new("ab\ncd");
    let plan = expect_plan(open_pair(&doc, &[range((0, 1), (1, 1))], '[', ']'));
    assert_eq!(apply(&plan, &doc), "a[b\nc]d");
    assert_eq!(plan.selections, vec![range((0, 2), (1, 1))]);
}

#[test]
fn mixed_cursor_and_selection_passes() {
    let doc = Document::new("ab cd");
    let selections = [cursor(0, 5), range((0, 0), (0, 2))];
    assert_eq!(open_pair(&doc, &selections, '(', ')'), KeyOutcome::Pass);
}

#[test]
fn quote_inside_string_steps_over_closing_quote() {
    let doc = Document::new("s = \"hi\"");
    let plan = expect_plan(open_pair(&doc, &[cursor(0, 7)], '"', '"'));
    assert!(plan.edits.is_empty());
    assert_eq!(plan.selections, vec![cursor(0, 8)]);
}

#[test]
fn quote_after_word_falls_back_to_close() {
    let doc = Document::new("x'");
    // Not followed by a pairable character, and the next char is the quote.
    let plan = expect_plan(open_pair(&doc, &[cursor(0, 1)], '\'', '\''));
    assert_eq!(plan.selections, vec![cursor(0, 2)]);

    let doc = Document::new("xy");
    assert_eq!(
        open_pair(&doc, &[cursor(0, 1)], '\'', '\''),
        KeyOutcome::Pass
    );
}

// =============================================================================
// Closing characters
// =============================================================================

#[test]
fn close_steps_over_matching_character() {
    let doc = Document::new("f ()");
    let plan = expect_plan(close_pair(&doc, &[cursor(0, 3)], ')'));
    assert!(plan.edits.is_empty());
    assert_eq!(plan.selections, vec![cursor(0, 4)]);
}

#[test]
fn close_passes_when_any_cursor_is_elsewhere() {
    let doc = Document::new("() x");
    assert_eq!(
        close_pair(&doc, &[cursor(0, 1), cursor(0, 4)], ')'),
        KeyOutcome::Pass
    );
    assert_eq!(
        close_pair(&doc, &[range((0, 0), (0, 1))], ')'),
        KeyOutcome::Pass
    );
}

// =============================================================================
// Backspace
// =============================================================================

#[test]
fn backspace_deletes_empty_pairs() {
    let doc = Document::new("f () \"\"");
    let plan = expect_plan(backspace(&doc, &[cursor(0, 6), cursor(0, 3)]));
    assert_eq!(apply(&plan, &doc), "f  ");
    assert_eq!(plan.selections, vec![cursor(0, 2), cursor(0, 3)]);
}

#[test]
fn backspace_with_cursors_sharing_a_quote_deletes_one_pair() {
    let doc = Document::new("\"\"\"");
    let plan = expect_plan(backspace(&doc, &[cursor(0, 1), cursor(0, 2)]));
    assert_eq!(plan.edits.len(), 1);
    assert_eq!(apply(&plan, &doc), "\"");
    assert_eq!(plan.selections, vec![cursor(0, 0)]);
}

#[test]
fn backspace_with_repeated_cursor_deletes_once() {
    let doc = Document::new("f ()x");
    let plan = expect_plan(backspace(&doc, &[cursor(0, 3), cursor(0, 3)]));
    assert_eq!(apply(&plan, &doc), "f x");
    assert_eq!(plan.selections, vec![cursor(0, 2)]);
}

#[test]
fn backspace_passes_outside_pairs() {
    let doc = Document::new("(x)");
    assert_eq!(backspace(&doc, &[cursor(0, 2)]), KeyOutcome::Pass);
    assert_eq!(backspace(&doc, &[cursor(0, 0)]), KeyOutcome::Pass);
    assert_eq!(
        backspace(&doc, &[range((0, 0), (0, 3))]),
        KeyOutcome::Pass
    );
    let doc = Document::new("(]");
    assert_eq!(backspace(&doc, &[cursor(0, 1)]), KeyOutcome::Pass);
}

// =============================================================================
// Indentation
// =============================================================================

#[test]
fn indent_more_adds_one_unit() {
    let doc = Document::new("x =\n1");
    let plan = expect_plan(indent(
        &doc,
        &[cursor(1, 1)],
        &IndentSettings::default(),
        IndentDirection::More,
    ));
    assert_eq!(apply(&plan, &doc), "x =\n  1");
    assert_eq!(plan.selections, vec![cursor(1, 3)]);
}

#[test]
fn indent_less_removes_at_most_one_unit() {
    let doc = Document::new("   a\n b\nc");
    let plan = expect_plan(indent(
        &doc,
        &[range((0, 0), (2, 1))],
        &IndentSettings::default(),
        IndentDirection::Less,
    ));
    assert_eq!(apply(&plan, &doc), " a\nb\nc");
    assert_eq!(plan.selections, vec![range((0, 1), (2, 1))]);
}

#[test]
fn indent_skips_last_line_of_selection_ending_at_column_zero() {
    let doc = Document::new("a\nb\n");
    let plan = expect_plan(indent(
        &doc,
        &[range((0, 0), (1, 0))],
        &IndentSettings::default(),
        IndentDirection::More,
    ));
    assert_eq!(apply(&plan, &doc), "  a\nb\n");
}

#[test]
fn indent_with_tabs() {
    let doc = Document::new("  x");
    let settings = IndentSettings {
        tab_size: 4,
        indent_unit: 2,
        indent_with_tabs: true,
    };
    let plan = expect_plan(indent(
        &doc,
        &[cursor(0, 3)],
        &settings,
        IndentDirection::More,
    ));
    assert_eq!(apply(&plan, &doc), "\tx");
    assert_eq!(plan.selections, vec![cursor(0, 2)]);
}

// =============================================================================
// Key map
// =============================================================================

#[test]
fn key_names_dispatch_to_commands() {
    let doc = Document::new("");
    let Some(KeyBinding::Edit(command)) = binding_for("'('") else {
        panic!("'(' should be an edit command");
    };
    assert_eq!(
        command,
        EditCommand::Open {
            open: '(',
            close: ')'
        }
    );
    let plan = expect_plan(command.run(&doc, &[cursor(0, 0)], &IndentSettings::default()));
    assert_eq!(apply(&plan, &doc), "()");
}

//! Integration tests for [`crate::highlight`], exercised only through the
//! public API (unlike the per-matcher unit tests colocated with each
//! module and the driver's own internal suite). Covers boundary cases
//! plus a couple of cross-cutting properties (ordering, coalescing).

use super::*;

fn kinds(source: &[u8]) -> Vec<(u32, u32, HighlightKind)> {
    highlight(source, Options::default())
        .into_iter()
        .map(|t| (t.begin, t.length, t.kind))
        .collect()
}

#[test]
fn scenario_plain_identifiers_no_keyword_collision() {
    // "int" is not a JS keyword.
    assert_eq!(
        kinds(b"int x;"),
        vec![
            (0, 3, HighlightKind::Id),
            (4, 1, HighlightKind::Id),
            (5, 1, HighlightKind::SymPunc),
        ]
    );
}

#[test]
fn scenario_block_comment_then_identifier() {
    assert_eq!(
        kinds(b"/*a*/ x"),
        vec![
            (0, 2, HighlightKind::CommentDelimiter),
            (2, 1, HighlightKind::Comment),
            (3, 2, HighlightKind::CommentDelimiter),
            (6, 1, HighlightKind::Id),
        ]
    );
}

#[test]
fn scenario_return_then_regex() {
    assert_eq!(
        kinds(b"return /x/g;"),
        vec![
            (0, 6, HighlightKind::KwControl),
            (7, 4, HighlightKind::String),
            (11, 1, HighlightKind::SymPunc),
        ]
    );
}

#[test]
fn scenario_self_closing_jsx_div() {
    assert_eq!(
        kinds(br#"<div a="1"/>"#),
        vec![
            (0, 1, HighlightKind::SymPunc),
            (1, 3, HighlightKind::MarkupTag),
            (5, 1, HighlightKind::MarkupTag),
            (6, 1, HighlightKind::SymPunc),
            (7, 1, HighlightKind::StringDelim),
            (8, 1, HighlightKind::String),
            (9, 1, HighlightKind::StringDelim),
            (10, 1, HighlightKind::SymPunc),
            (11, 1, HighlightKind::SymPunc),
        ]
    );
}

#[test]
fn scenario_empty_fragment() {
    assert_eq!(
        kinds(b"<></>"),
        vec![
            (0, 1, HighlightKind::SymPunc),
            (1, 1, HighlightKind::SymPunc),
            (2, 1, HighlightKind::SymPunc),
            (3, 1, HighlightKind::SymPunc),
            (4, 1, HighlightKind::SymPunc),
        ]
    );
}

#[test]
fn scenario_hashbang_at_start_of_file() {
    assert_eq!(
        kinds(b"#!/usr/bin/env node\nx"),
        vec![
            (0, 2, HighlightKind::CommentDelimiter),
            (2, 17, HighlightKind::Comment),
            (20, 1, HighlightKind::Id),
        ]
    );
}

#[test]
fn scenario_jsx_spread_attribute_and_braced_child() {
    // "<a {...b}>{c}</a>": plain text is never emitted, but every
    // delimiter, name, and the recursed-into JS inside both brace pairs
    // is.
    assert_eq!(
        kinds(b"<a {...b}>{c}</a>"),
        vec![
            (0, 1, HighlightKind::SymPunc),   // <
            (1, 1, HighlightKind::MarkupTag), // a
            (3, 1, HighlightKind::SymBrace),  // {
            (4, 3, HighlightKind::SymPunc),   // ...
            (7, 1, HighlightKind::Id),        // b
            (8, 1, HighlightKind::SymBrace),  // }
            (9, 1, HighlightKind::SymPunc),   // >
            (10, 1, HighlightKind::SymBrace), // {
            (11, 1, HighlightKind::Id),       // c
            (12, 1, HighlightKind::SymBrace), // }
            (13, 1, HighlightKind::SymPunc),  // <
            (14, 1, HighlightKind::SymPunc),  // /
            (15, 1, HighlightKind::MarkupTag), // a
            (16, 1, HighlightKind::SymPunc),  // >
        ]
    );
}

#[test]
fn boundary_empty_source() {
    assert_eq!(kinds(b""), vec![]);
}

#[test]
fn boundary_stray_close_brace() {
    assert_eq!(kinds(b"}"), vec![(0, 1, HighlightKind::Error)]);
}

#[test]
fn boundary_invalid_base2_digit() {
    assert_eq!(
        kinds(b"0b12"),
        vec![(0, 3, HighlightKind::Error), (3, 1, HighlightKind::Number)]
    );
}

#[test]
fn boundary_bigint_with_separators() {
    assert_eq!(kinds(b"1_000_000n"), vec![(0, 10, HighlightKind::Number)]);
}

#[test]
fn boundary_doubled_separator() {
    assert_eq!(kinds(b"1__2"), vec![(0, 4, HighlightKind::Error)]);
}

#[test]
fn boundary_leading_dot_vs_bare_dot() {
    assert_eq!(kinds(b".5"), vec![(0, 2, HighlightKind::Number)]);
    assert_eq!(kinds(b"."), vec![(0, 1, HighlightKind::SymPunc)]);
}

#[test]
fn boundary_standalone_regex() {
    // No preceding token: can_be_regex starts true.
    assert_eq!(kinds(b"/a/gi"), vec![(0, 5, HighlightKind::String)]);
}

#[test]
fn boundary_division_chain_has_no_regex() {
    assert_eq!(
        kinds(b"a / b / c"),
        vec![
            (0, 1, HighlightKind::Id),
            (2, 1, HighlightKind::SymOp),
            (4, 1, HighlightKind::Id),
            (6, 1, HighlightKind::SymOp),
            (8, 1, HighlightKind::Id),
        ]
    );
}

#[test]
fn boundary_unterminated_string() {
    assert_eq!(
        kinds(b"\"abc"),
        vec![
            (0, 1, HighlightKind::StringDelim),
            (1, 3, HighlightKind::String),
        ]
    );
}

#[test]
fn boundary_template_line_continuation() {
    // "`a\<LF>b`": the backslash is its own `escape` token, the line
    // terminator that follows renders as `string`, and coalescing merges it
    // with the plain "b" that comes right after.
    assert_eq!(
        kinds(b"`a\\\nb`"),
        vec![
            (0, 1, HighlightKind::StringDelim),
            (1, 1, HighlightKind::String),
            (2, 1, HighlightKind::Escape),
            (3, 2, HighlightKind::String),
            (5, 1, HighlightKind::StringDelim),
        ]
    );
}

#[test]
fn boundary_template_with_substitution() {
    assert_eq!(
        kinds(b"`x${1+2}y`"),
        vec![
            (0, 1, HighlightKind::StringDelim),
            (1, 1, HighlightKind::String),
            (2, 2, HighlightKind::Escape),
            (4, 1, HighlightKind::Number),
            (5, 1, HighlightKind::SymOp),
            (6, 1, HighlightKind::Number),
            (7, 1, HighlightKind::Escape),
            (8, 1, HighlightKind::String),
            (9, 1, HighlightKind::StringDelim),
        ]
    );
}

#[test]
fn property_non_overlapping_and_in_order() {
    let tokens = highlight(
        b"function f(x) { return /a/.test(x) ? `y${x}` : 'n'; }",
        Options::default(),
    );
    let mut prev_end = 0u32;
    for t in &tokens {
        assert!(t.length >= 1);
        assert!(t.begin >= prev_end);
        prev_end = t.begin + t.length;
    }
}

#[test]
fn property_coalescing_matches_manual_merge() {
    let with = highlight(b"abc def", Options { coalescing: true });
    let without = highlight(b"abc def", Options { coalescing: false });

    let mut merged: Vec<Token> = Vec::new();
    for t in without {
        if let Some(last) = merged.last_mut() {
            if last.kind == t.kind && last.begin + last.length == t.begin {
                last.length += t.length;
                continue;
            }
        }
        merged.push(t);
    }
    assert_eq!(with, merged);
}

#[test]
fn scenario_identifiers_starting_with_underscore() {
    assert_eq!(kinds(b"_foo"), vec![(0, 4, HighlightKind::Id)]);
    assert_eq!(
        kinds(b"__proto__ = 1;"),
        vec![
            (0, 9, HighlightKind::Id),
            (10, 1, HighlightKind::SymOp),
            (12, 1, HighlightKind::Number),
            (13, 1, HighlightKind::SymPunc),
        ]
    );
}

#[test]
fn private_identifier_in_member_access() {
    assert_eq!(
        kinds(b"this.#x"),
        vec![
            (0, 4, HighlightKind::KwOther),
            (4, 1, HighlightKind::SymPunc),
            (5, 2, HighlightKind::Id),
        ]
    );
}

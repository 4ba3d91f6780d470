//! Token sources that tag spans by category name instead of by type.

use hilite::syntax::strip_sgr;
use hilite::{highlight_to_vec, ColorDescriptor, HighlightCategory, Position, Token};

/// A span as an external lexer would dump it
struct Tagged {
    line: usize,
    begin: usize,
    end: usize,
    tag: &'static str,
}

fn to_token(span: &Tagged) -> Token {
    let category = HighlightCategory::from_name(span.tag).unwrap_or(HighlightCategory::Nothing);
    Token::new(Position::new(span.line, span.begin), Position::new(span.line, span.end), category)
}

#[test]
fn known_names_color_like_their_category() {
    for category in HighlightCategory::ALL {
        assert_eq!(ColorDescriptor::for_name(category.name()), category.color());
    }
}

#[test]
fn unknown_tags_replay_uncolored() {
    let data = b"if x\n  yield";
    let spans = [
        Tagged { line: 1, begin: 0, end: 2, tag: "Control" },
        Tagged { line: 1, begin: 3, end: 4, tag: "Variable" },
        Tagged { line: 2, begin: 2, end: 7, tag: "keyword" },
    ];

    for span in &spans[1..] {
        let color = ColorDescriptor::for_name(span.tag);
        assert_eq!(color, ColorDescriptor::FALLBACK);
        assert!(!color.is_decorated());
    }

    let out = highlight_to_vec(data, false, spans.iter().map(to_token)).unwrap();
    assert_eq!(out, b"\x1b[0;33mif\x1b[0m x\n  yield");
    assert_eq!(strip_sgr(&out), data);
}

//! Token colorizer
//!
//! Replays a source buffer to an output stream, wrapping each token's
//! span in SGR color escapes while every other byte is copied through
//! untouched.

use std::io::Write;

use tracing::{debug, debug_span, trace, warn};

use crate::cursor::ReplayCursor;
use crate::error::Result;
use crate::position::Position;
use crate::syntax::escape::{write_escape, Escape};
use crate::syntax::HighlightCategory;

/// A lexical token with its source span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub begin: Position,
    pub end: Position,
    pub category: HighlightCategory,
}

impl Token {
    /// Create a token
    pub fn new(begin: Position, end: Position, category: HighlightCategory) -> Self {
        Self { begin, end, category }
    }
}

/// Anything that can hand out tokens over the buffer being replayed
///
/// Tokens must come in source order and lie within that buffer.
pub trait TokenSource {
    /// Next token, or `None` once the stream is exhausted
    fn next_token(&mut self) -> Result<Option<Token>>;
}

impl<I: Iterator<Item = Token>> TokenSource for I {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.next())
    }
}

/// Replay `data` to `out` with color escapes around each token
///
/// With `protect` set every injected escape is bracketed by the
/// ignore markers. A token whose positions disagree with `data` aborts
/// the run; whatever was already written stays written.
pub fn highlight<W, S>(data: &[u8], out: &mut W, protect: bool, mut tokens: S) -> Result<()>
where
    W: Write + ?Sized,
    S: TokenSource,
{
    let span = debug_span!("highlight", len = data.len(), protect);
    let _enter = span.enter();

    let mut cursor = ReplayCursor::new();
    let mut count = 0usize;
    let result = replay(data, out, protect, &mut tokens, &mut cursor, &mut count);

    match &result {
        Ok(()) => debug!(tokens = count, "replay complete"),
        Err(err) => warn!(tokens = count, offset = cursor.offset, "replay aborted: {err}"),
    }
    result
}

fn replay<W, S>(
    data: &[u8],
    out: &mut W,
    protect: bool,
    tokens: &mut S,
    cursor: &mut ReplayCursor,
    count: &mut usize,
) -> Result<()>
where
    W: Write + ?Sized,
    S: TokenSource,
{
    while let Some(token) = tokens.next_token()? {
        trace!(begin = %token.begin, end = %token.end, category = token.category.name(), "token");
        *count += 1;

        cursor.advance_to(data, out, token.begin)?;

        let color = token.category.color();
        if color.is_decorated() {
            write_escape(out, Escape::Start(color), protect)?;
        }

        cursor.advance_to(data, out, token.end)?;

        if color.is_decorated() {
            write_escape(out, Escape::Reset, protect)?;
        }
    }
    cursor.drain(data, out)
}

/// Convenience wrapper collecting the output in memory
pub fn highlight_to_vec<S: TokenSource>(data: &[u8], protect: bool, tokens: S) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() + data.len() / 4);
    highlight(data, &mut out, protect, tokens)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HighlightError;
    use crate::syntax::escape::strip_protected;

    fn token(category: HighlightCategory, begin: (usize, usize), end: (usize, usize)) -> Token {
        Token::new(
            Position::new(begin.0, begin.1),
            Position::new(end.0, end.1),
            category,
        )
    }

    #[test]
    fn test_comment_then_trailing_text() {
        let tokens = vec![token(HighlightCategory::Comment, (1, 0), (1, 5))];
        let out = highlight_to_vec(b"// hi\nx", false, tokens.into_iter()).unwrap();
        assert_eq!(out, b"\x1b[1;30m// hi\x1b[0m\nx");
    }

    #[test]
    fn test_identifier_not_decorated() {
        let tokens = vec![token(HighlightCategory::Identifier, (1, 0), (1, 1))];
        let out = highlight_to_vec(b"x", false, tokens.into_iter()).unwrap();
        assert_eq!(out, b"x");
    }

    #[test]
    fn test_no_tokens_copies_input() {
        let out = highlight_to_vec(b"abc", false, std::iter::empty()).unwrap();
        assert_eq!(out, b"abc");
    }

    #[test]
    fn test_empty_input() {
        let out = highlight_to_vec(b"", true, std::iter::empty()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_end_past_input_aborts() {
        let tokens = vec![
            token(HighlightCategory::Constant, (1, 0), (1, 9)),
            token(HighlightCategory::Control, (1, 9), (1, 10)),
        ];
        let mut out = Vec::new();
        let err = highlight(b"abc", &mut out, false, tokens.into_iter()).unwrap_err();
        assert!(matches!(err, HighlightError::UnexpectedEndOfInput { .. }));
        // Start escape and the bytes consumed so far are already out
        assert_eq!(out, b"\x1b[0;31mabc");
    }

    #[test]
    fn test_end_past_input_with_trailing_newline() {
        let tokens = vec![token(HighlightCategory::Constant, (1, 0), (1, 9))];
        let err = highlight_to_vec(b"abc\n", false, tokens.into_iter()).unwrap_err();
        assert!(matches!(err, HighlightError::UnexpectedEndOfInput { .. }), "{err}");
    }

    #[test]
    fn test_protected_control_keyword() {
        let tokens = vec![token(HighlightCategory::Control, (1, 0), (1, 2))];
        let out = highlight_to_vec(b"if", true, tokens.into_iter()).unwrap();
        assert_eq!(out, b"\x01\x1b[0;33m\x02if\x01\x1b[0m\x02");
    }

    #[test]
    fn test_backwards_token_is_invalid() {
        let tokens = vec![
            token(HighlightCategory::Type, (1, 4), (1, 7)),
            token(HighlightCategory::Operator, (1, 2), (1, 3)),
        ];
        let err = highlight_to_vec(b"int x = 1;", false, tokens.into_iter()).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidLocation { .. }));
    }

    #[test]
    fn test_multiline_input() {
        let data = b"let a = 1;\nif (a) {}\n";
        let tokens = vec![
            token(HighlightCategory::Structure, (1, 0), (1, 3)),
            token(HighlightCategory::Identifier, (1, 4), (1, 5)),
            token(HighlightCategory::Operator, (1, 6), (1, 7)),
            token(HighlightCategory::Constant, (1, 8), (1, 9)),
            token(HighlightCategory::Control, (2, 0), (2, 2)),
        ];
        let out = highlight_to_vec(data, false, tokens.into_iter()).unwrap();
        let expected: &[u8] = b"\x1b[1;34mlet\x1b[0m a \x1b[0;36m=\x1b[0m \x1b[0;31m1\x1b[0m;\n\x1b[0;33mif\x1b[0m (a) {}\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_protected_strips_to_unprotected() {
        let data = b"/* c */ x";
        let tokens = [
            token(HighlightCategory::Comment, (1, 0), (1, 7)),
            token(HighlightCategory::Identifier, (1, 8), (1, 9)),
        ];
        let plain = highlight_to_vec(data, false, tokens.into_iter()).unwrap();
        let protected = highlight_to_vec(data, true, tokens.into_iter()).unwrap();
        assert_ne!(plain, protected);
        assert_eq!(strip_protected(&protected), plain);
    }

    struct FailingSource;

    impl TokenSource for FailingSource {
        fn next_token(&mut self) -> Result<Option<Token>> {
            Err(HighlightError::Message("lexer failed".to_string()))
        }
    }

    #[test]
    fn test_source_error_propagates() {
        let err = highlight_to_vec(b"abc", false, FailingSource).unwrap_err();
        assert!(matches!(err, HighlightError::Message(_)));
    }
}

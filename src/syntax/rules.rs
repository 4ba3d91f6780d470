//! Pattern rules for the built-in lexer
//!
//! This module defines the rule types used to match and classify
//! source bytes. Rules work on byte slices so that input which is not
//! valid UTF-8 can still be replayed.

use regex::bytes::Regex;

use super::category::HighlightCategory;
use crate::error::{HighlightError, Result};

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| HighlightError::Language(format!("rule '{}': {}", name, e)))
}

/// First non-empty match at or after `start`
///
/// Searches the whole line so `^` and `\b` see the bytes before `start`.
fn find_nonempty(regex: &Regex, text: &[u8], start: usize) -> Option<(usize, usize)> {
    let mut from = start;
    while from < text.len() {
        let m = regex.find_at(text, from)?;
        if !m.is_empty() {
            return Some((m.start(), m.end()));
        }
        from = m.end() + 1;
    }
    None
}

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a category to the match.
/// Rules are tried in priority order (highest first).
#[derive(Debug)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category to assign to matches
    pub category: HighlightCategory,
    /// Priority (higher = matched first)
    pub priority: i32,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, category: HighlightCategory, priority: i32) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: compile(name, pattern)?,
            category,
            priority,
        })
    }

    /// Find the first non-empty match in text starting at position
    pub fn find_at(&self, text: &[u8], start: usize) -> Option<(usize, usize)> {
        find_nonempty(&self.pattern, text, start)
    }
}

/// A multi-line construct rule (block comments, strings)
///
/// These rules track state across lines for constructs that
/// can span multiple lines.
#[derive(Debug)]
pub struct MultilineRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    /// Category for this construct
    pub category: HighlightCategory,
    /// Escape byte that suppresses an end match (usually backslash)
    pub escape: Option<u8>,
    /// Unique ID for this multiline state (1-255, 0 = normal)
    pub state_id: u8,
}

impl MultilineRule {
    /// Create a new multiline rule
    pub fn new(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        category: HighlightCategory,
        state_id: u8,
    ) -> Result<Self> {
        if state_id == 0 {
            return Err(HighlightError::Language(format!(
                "rule '{}': state id 0 is reserved",
                name
            )));
        }
        Ok(Self {
            name: name.to_string(),
            start: compile(name, start_pattern)?,
            end: compile(name, end_pattern)?,
            category,
            escape: None,
            state_id,
        })
    }

    /// Builder: let `escape` suppress the end pattern
    pub fn with_escape(mut self, escape: u8) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Find start of this construct in text
    pub fn find_start(&self, text: &[u8], start: usize) -> Option<(usize, usize)> {
        find_nonempty(&self.start, text, start)
    }

    /// Find end of this construct in text, respecting escapes
    pub fn find_end(&self, text: &[u8], start: usize) -> Option<usize> {
        if start >= text.len() {
            return None;
        }

        let Some(escape) = self.escape else {
            return find_nonempty(&self.end, text, start).map(|(_, end)| end);
        };

        let mut pos = start;
        while let Some((match_start, match_end)) = find_nonempty(&self.end, text, pos) {
            let escapes = text[start..match_start]
                .iter()
                .rev()
                .take_while(|&&b| b == escape)
                .count();
            if escapes % 2 == 0 {
                return Some(match_end);
            }
            // Odd number of escapes = escaped
            pos = match_end;
        }
        None
    }
}

/// Line state for tracking multi-line constructs
///
/// Carried from one line to the next to track whether we're inside
/// a multi-line comment, string, etc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// 0 = normal, non-zero = inside multiline rule with this ID
    pub multiline_id: u8,
}

impl LineState {
    /// Create state for being inside a multiline construct
    pub fn inside(state_id: u8) -> Self {
        Self { multiline_id: state_id }
    }

    /// Check if we're inside a multiline construct
    pub fn is_inside_multiline(&self) -> bool {
        self.multiline_id != 0
    }

    /// Check if we're in normal (no multiline) state
    pub fn is_normal(&self) -> bool {
        self.multiline_id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", HighlightCategory::Constant, 50).unwrap();
        assert_eq!(rule.find_at(b"abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at(b"abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at(b"no numbers", 0), None);
    }

    #[test]
    fn test_pattern_rule_skips_empty_matches() {
        let rule = PatternRule::new("digits", r"\d*", HighlightCategory::Constant, 50).unwrap();
        assert_eq!(rule.find_at(b"ab 12", 0), Some((3, 5)));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternRule::new("broken", r"(", HighlightCategory::Error, 1).unwrap_err();
        assert!(matches!(err, HighlightError::Language(_)));
    }

    #[test]
    fn test_multiline_rule() {
        let rule = MultilineRule::new("block_comment", r"/\*", r"\*/", HighlightCategory::Comment, 1)
            .unwrap();

        assert_eq!(rule.find_start(b"/* comment */", 0), Some((0, 2)));
        assert_eq!(rule.find_end(b"/* comment */", 2), Some(13));
        assert_eq!(rule.find_end(b"/* comment", 2), None);
    }

    #[test]
    fn test_multiline_reserved_state() {
        assert!(MultilineRule::new("bad", "a", "b", HighlightCategory::Comment, 0).is_err());
    }

    #[test]
    fn test_multiline_with_escape() {
        let rule = MultilineRule::new("string", r#"""#, r#"""#, HighlightCategory::Constant, 2)
            .unwrap()
            .with_escape(b'\\');

        // Regular end
        assert_eq!(rule.find_end(br#"hello""#, 0), Some(6));
        // Escaped quote
        assert_eq!(rule.find_end(br#"hello\"world""#, 0), Some(13));
        // Escaped backslash does not escape the quote
        assert_eq!(rule.find_end(br#"a\\" b"#, 0), Some(4));
        // Only escaped quotes
        assert_eq!(rule.find_end(br#"a\" b"#, 0), None);
    }

    #[test]
    fn test_line_state() {
        let normal = LineState::default();
        assert!(normal.is_normal());
        assert!(!normal.is_inside_multiline());

        let inside = LineState::inside(1);
        assert!(!inside.is_normal());
        assert!(inside.is_inside_multiline());
    }
}

//! Highlight categories
//!
//! This module defines the closed set of display classes a lexer
//! can attach to a token.

use super::color::ColorDescriptor;

/// Display classification of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    /// Nothing worth highlighting
    Nothing,
    /// Comments
    Comment,
    /// Literals: strings, numbers, true/false/null
    Constant,
    /// Control flow keywords (if, for, return)
    Control,
    /// Malformed input the lexer still recognised
    Error,
    /// Plain identifiers
    Identifier,
    /// Directives, decorators, attributes
    Meta,
    /// Operators and punctuation
    Operator,
    /// Escapes and other special forms
    Special,
    /// Declaration keywords (function, struct, class)
    Structure,
    /// Type names
    Type,
}

impl HighlightCategory {
    /// Every category, in table order
    pub const ALL: [HighlightCategory; 11] = [
        HighlightCategory::Nothing,
        HighlightCategory::Comment,
        HighlightCategory::Constant,
        HighlightCategory::Control,
        HighlightCategory::Error,
        HighlightCategory::Identifier,
        HighlightCategory::Meta,
        HighlightCategory::Operator,
        HighlightCategory::Special,
        HighlightCategory::Structure,
        HighlightCategory::Type,
    ];

    /// Color used when replaying tokens of this category
    pub fn color(&self) -> ColorDescriptor {
        ColorDescriptor::for_category(*self)
    }

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            HighlightCategory::Nothing => "Nothing",
            HighlightCategory::Comment => "Comment",
            HighlightCategory::Constant => "Constant",
            HighlightCategory::Control => "Control",
            HighlightCategory::Error => "Error",
            HighlightCategory::Identifier => "Identifier",
            HighlightCategory::Meta => "Meta",
            HighlightCategory::Operator => "Operator",
            HighlightCategory::Special => "Special",
            HighlightCategory::Structure => "Structure",
            HighlightCategory::Type => "Type",
        }
    }

    /// Parse a category from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for category in HighlightCategory::ALL {
            assert_eq!(HighlightCategory::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(HighlightCategory::from_name("Keyword"), None);
        assert_eq!(HighlightCategory::from_name("comment"), None);
        assert_eq!(HighlightCategory::from_name(""), None);
    }
}

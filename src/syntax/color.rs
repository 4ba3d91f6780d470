//! Category to color mapping
//!
//! Colors are raw SGR foreground codes. A code of zero means the token
//! is replayed without any escape sequence at all.

use super::category::HighlightCategory;

/// Bold flag plus SGR color code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorDescriptor {
    pub bold: bool,
    pub code: u8,
}

impl ColorDescriptor {
    /// No decoration
    pub const PLAIN: ColorDescriptor = ColorDescriptor::new(false, 0);

    /// Used for categories outside the known table. Bold with no hue,
    /// which still emits nothing since the code is zero.
    pub const FALLBACK: ColorDescriptor = ColorDescriptor::new(true, 0);

    pub const fn new(bold: bool, code: u8) -> Self {
        Self { bold, code }
    }

    /// Look up the fixed color for a category
    pub fn for_category(category: HighlightCategory) -> Self {
        match category {
            HighlightCategory::Comment => Self::new(true, 30),
            HighlightCategory::Constant => Self::new(false, 31),
            HighlightCategory::Control => Self::new(false, 33),
            HighlightCategory::Error => Self::new(true, 31),
            HighlightCategory::Identifier => Self::PLAIN,
            HighlightCategory::Meta => Self::new(false, 32),
            HighlightCategory::Nothing => Self::PLAIN,
            HighlightCategory::Operator => Self::new(false, 36),
            HighlightCategory::Special => Self::new(false, 35),
            HighlightCategory::Structure => Self::new(true, 34),
            HighlightCategory::Type => Self::new(true, 34),
        }
    }

    /// Look up a color by category name, falling back for unknown names
    ///
    /// For token sources outside this crate that tag spans by name, such
    /// as an external lexer or a serialized token dump. Names follow
    /// [`HighlightCategory::name`]; anything else gets [`Self::FALLBACK`],
    /// which is never decorated, so an unrecognised tag leaves its text
    /// uncolored instead of failing the run.
    pub fn for_name(name: &str) -> Self {
        HighlightCategory::from_name(name)
            .map(Self::for_category)
            .unwrap_or(Self::FALLBACK)
    }

    /// Whether tokens with this color get escape sequences
    pub fn is_decorated(&self) -> bool {
        self.code != 0
    }
}

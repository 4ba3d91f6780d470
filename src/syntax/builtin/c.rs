//! C/C++ language definition

use crate::error::Result;
use crate::syntax::category::HighlightCategory;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};

/// Create C language definition (also works for C++)
pub fn c_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("C");
    for ext in ["c", "h", "cpp", "hpp", "cc", "cxx", "m", "mm"] {
        lang.add_extension(ext);
    }

    // Multiline rules
    lang.add_multiline(MultilineRule::new("block_comment", r"/\*", r"\*/", HighlightCategory::Comment, 1)?);
    lang.add_multiline(
        MultilineRule::new("string", "\"", "\"", HighlightCategory::Constant, 2)?.with_escape(b'\\'),
    );

    // Single-line patterns
    lang.add_pattern(PatternRule::new("line_comment", r"//.*$", HighlightCategory::Comment, 100)?);
    lang.add_pattern(PatternRule::new("preprocessor", r"^\s*#\s*\w+", HighlightCategory::Meta, 95)?);
    lang.add_pattern(PatternRule::new("include_path", r"<[\w./]+>", HighlightCategory::Constant, 91)?);
    lang.add_pattern(PatternRule::new("char", r"'(?:[^'\\]|\\.)'", HighlightCategory::Constant, 90)?);

    let control = r"\b(break|case|continue|default|do|else|for|goto|if|return|switch|while|catch|throw|try|co_await|co_return|co_yield)\b";
    lang.add_pattern(PatternRule::new("control", control, HighlightCategory::Control, 80)?);

    let structure = r"\b(auto|const|enum|extern|inline|register|restrict|sizeof|static|struct|typedef|union|volatile|class|namespace|template|typename|using|virtual|public|private|protected|new|delete|operator|friend|constexpr)\b";
    lang.add_pattern(PatternRule::new("structure", structure, HighlightCategory::Structure, 79)?);

    let types = r"\b(bool|char|double|float|int|long|short|signed|unsigned|void|size_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE)\b";
    lang.add_pattern(PatternRule::new("type", types, HighlightCategory::Type, 75)?);

    lang.add_pattern(PatternRule::new("constant", r"\b(NULL|nullptr|true|false)\b", HighlightCategory::Constant, 74)?);
    lang.add_pattern(PatternRule::new("special", r"\bthis\b", HighlightCategory::Special, 73)?);

    // Numbers
    lang.add_pattern(PatternRule::new("hex", r"\b0[xX][0-9a-fA-F]+[uUlL]*\b", HighlightCategory::Constant, 65)?);
    lang.add_pattern(PatternRule::new(
        "float",
        r"\b\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?\b",
        HighlightCategory::Constant,
        64,
    )?);
    lang.add_pattern(PatternRule::new("integer", r"\b\d+[uUlL]*\b", HighlightCategory::Constant, 63)?);

    lang.add_pattern(PatternRule::new("identifier", r"[A-Za-z_]\w*", HighlightCategory::Identifier, 50)?);
    lang.add_pattern(PatternRule::new("operator", r"[+\-*/%&|^!<>=~?:.]+", HighlightCategory::Operator, 40)?);

    Ok(lang)
}

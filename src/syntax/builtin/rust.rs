//! Rust language definition

use crate::error::Result;
use crate::syntax::category::HighlightCategory;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};

/// Create Rust language definition
pub fn rust_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Rust");
    lang.add_extension("rs");

    // Multiline rules
    lang.add_multiline(MultilineRule::new("block_comment", r"/\*", r"\*/", HighlightCategory::Comment, 1)?);
    lang.add_multiline(MultilineRule::new("raw_string", r##"r#""##, r##""#"##, HighlightCategory::Constant, 2)?);
    lang.add_multiline(
        MultilineRule::new("string", "\"", "\"", HighlightCategory::Constant, 3)?.with_escape(b'\\'),
    );

    // Single-line patterns
    lang.add_pattern(PatternRule::new("line_comment", r"//.*$", HighlightCategory::Comment, 100)?);
    lang.add_pattern(PatternRule::new("attribute", r"#!?\[[^\]]*\]", HighlightCategory::Meta, 95)?);
    lang.add_pattern(PatternRule::new("char", r"'(?:[^'\\]|\\.)'", HighlightCategory::Constant, 90)?);
    lang.add_pattern(PatternRule::new("lifetime", r"'\w+", HighlightCategory::Special, 89)?);
    lang.add_pattern(PatternRule::new("macro", r"\b\w+!", HighlightCategory::Meta, 85)?);

    let control = r"\b(break|continue|else|for|if|in|loop|match|return|while|await|yield)\b";
    lang.add_pattern(PatternRule::new("control", control, HighlightCategory::Control, 80)?);

    let structure = r"\b(as|async|const|crate|dyn|enum|extern|fn|impl|let|mod|move|mut|pub|ref|static|struct|super|trait|type|unsafe|use|where)\b";
    lang.add_pattern(PatternRule::new("structure", structure, HighlightCategory::Structure, 79)?);

    lang.add_pattern(PatternRule::new("special", r"\b(self|Self)\b", HighlightCategory::Special, 77)?);
    lang.add_pattern(PatternRule::new("constant", r"\b(true|false)\b", HighlightCategory::Constant, 76)?);

    let types = r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64)\b";
    lang.add_pattern(PatternRule::new("type", types, HighlightCategory::Type, 75)?);
    lang.add_pattern(PatternRule::new("type_name", r"\b[A-Z][a-zA-Z0-9_]*\b", HighlightCategory::Type, 60)?);

    // Numbers
    lang.add_pattern(PatternRule::new("hex", r"\b0x[0-9a-fA-F_]+\b", HighlightCategory::Constant, 65)?);
    lang.add_pattern(PatternRule::new("binary", r"\b0b[01_]+\b", HighlightCategory::Constant, 65)?);
    lang.add_pattern(PatternRule::new(
        "float",
        r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?\b",
        HighlightCategory::Constant,
        64,
    )?);
    lang.add_pattern(PatternRule::new(
        "integer",
        r"\b\d[\d_]*(?:u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize)?\b",
        HighlightCategory::Constant,
        63,
    )?);

    lang.add_pattern(PatternRule::new("identifier", r"[a-z_][a-zA-Z0-9_]*", HighlightCategory::Identifier, 50)?);
    lang.add_pattern(PatternRule::new("operator", r"[+\-*/%&|^!<>=@.:?]+", HighlightCategory::Operator, 40)?);

    Ok(lang)
}

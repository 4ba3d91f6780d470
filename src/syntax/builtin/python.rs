//! Python language definition

use crate::error::Result;
use crate::syntax::category::HighlightCategory;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};

/// Create Python language definition
pub fn python_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Python");
    lang.add_extension("py");
    lang.add_extension("pyw");

    // Only triple quotes span lines; they win over plain strings at the same column
    lang.add_multiline(MultilineRule::new("triple_double", r#"""""#, r#"""""#, HighlightCategory::Constant, 1)?);
    lang.add_multiline(MultilineRule::new("triple_single", r"'''", r"'''", HighlightCategory::Constant, 2)?);

    lang.add_pattern(PatternRule::new("comment", r"#.*$", HighlightCategory::Comment, 100)?);
    // An unterminated string stops at the end of its line
    lang.add_pattern(PatternRule::new(
        "double_string",
        r#""(?:[^"\\]|\\.)*"?"#,
        HighlightCategory::Constant,
        90,
    )?);
    lang.add_pattern(PatternRule::new(
        "single_string",
        r"'(?:[^'\\]|\\.)*'?",
        HighlightCategory::Constant,
        90,
    )?);
    lang.add_pattern(PatternRule::new("decorator", r"@[\w.]+", HighlightCategory::Meta, 95)?);

    let control = r"\b(break|continue|elif|else|except|finally|for|if|pass|raise|return|try|while|with|yield|await)\b";
    lang.add_pattern(PatternRule::new("control", control, HighlightCategory::Control, 80)?);

    let structure = r"\b(and|as|assert|async|class|def|del|from|global|import|in|is|lambda|nonlocal|not|or)\b";
    lang.add_pattern(PatternRule::new("structure", structure, HighlightCategory::Structure, 79)?);

    lang.add_pattern(PatternRule::new("self", r"\b(self|cls)\b", HighlightCategory::Special, 77)?);
    lang.add_pattern(PatternRule::new("constant", r"\b(True|False|None)\b", HighlightCategory::Constant, 76)?);

    let builtins = r"\b(bool|bytes|dict|float|frozenset|int|list|object|set|str|tuple|type)\b";
    lang.add_pattern(PatternRule::new("builtin_type", builtins, HighlightCategory::Type, 75)?);

    // Numbers
    lang.add_pattern(PatternRule::new("hex", r"\b0[xX][0-9a-fA-F_]+\b", HighlightCategory::Constant, 65)?);
    lang.add_pattern(PatternRule::new(
        "float",
        r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?j?\b",
        HighlightCategory::Constant,
        64,
    )?);
    lang.add_pattern(PatternRule::new("integer", r"\b\d[\d_]*j?\b", HighlightCategory::Constant, 63)?);

    lang.add_pattern(PatternRule::new("identifier", r"[A-Za-z_]\w*", HighlightCategory::Identifier, 50)?);
    lang.add_pattern(PatternRule::new("operator", r"[+\-*/%&|^!<>=~:.]+", HighlightCategory::Operator, 40)?);

    Ok(lang)
}

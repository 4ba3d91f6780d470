//! JavaScript language definition

use crate::error::Result;
use crate::syntax::category::HighlightCategory;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};

/// Create JavaScript language definition (also used for Cycript)
pub fn javascript_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("JavaScript");
    for ext in ["js", "mjs", "cjs", "cy"] {
        lang.add_extension(ext);
    }

    // Multiline rules
    lang.add_multiline(MultilineRule::new("block_comment", r"/\*", r"\*/", HighlightCategory::Comment, 1)?);
    lang.add_multiline(
        MultilineRule::new("template", "`", "`", HighlightCategory::Constant, 2)?.with_escape(b'\\'),
    );

    // Single-line patterns
    lang.add_pattern(PatternRule::new("line_comment", r"//.*$", HighlightCategory::Comment, 100)?);
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

    let control = r"\b(break|case|catch|continue|default|do|else|finally|for|if|return|switch|throw|try|while|with|yield|await)\b";
    lang.add_pattern(PatternRule::new("control", control, HighlightCategory::Control, 80)?);

    let structure = r"\b(class|const|delete|enum|export|extends|function|import|in|instanceof|let|new|of|static|typeof|var|void|async|get|set)\b";
    lang.add_pattern(PatternRule::new("structure", structure, HighlightCategory::Structure, 79)?);

    lang.add_pattern(PatternRule::new(
        "constant",
        r"\b(true|false|null|undefined|NaN|Infinity)\b",
        HighlightCategory::Constant,
        78,
    )?);
    lang.add_pattern(PatternRule::new("special", r"\b(this|super|arguments)\b", HighlightCategory::Special, 77)?);
    lang.add_pattern(PatternRule::new(
        "type",
        r"\b(Array|Boolean|Date|Error|Function|Map|Number|Object|Promise|RegExp|Set|String|Symbol)\b",
        HighlightCategory::Type,
        75,
    )?);

    // Numbers
    lang.add_pattern(PatternRule::new("hex", r"\b0[xX][0-9a-fA-F_]+n?\b", HighlightCategory::Constant, 65)?);
    lang.add_pattern(PatternRule::new(
        "number",
        r"\b\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?n?\b",
        HighlightCategory::Constant,
        63,
    )?);

    lang.add_pattern(PatternRule::new("identifier", r"[A-Za-z_$][\w$]*", HighlightCategory::Identifier, 50)?);
    lang.add_pattern(PatternRule::new("operator", r"[+\-*/%&|^!<>=~?:.]+", HighlightCategory::Operator, 40)?);

    Ok(lang)
}

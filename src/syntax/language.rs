//! Language definitions for the built-in lexer
//!
//! This module provides the LanguageDefinition struct that combines
//! pattern rules and multiline rules for a programming language, and
//! turns a source buffer into positioned tokens.

use toml::{Table, Value};

use super::category::HighlightCategory;
use super::rules::{LineState, MultilineRule, PatternRule};
use crate::error::{HighlightError, Result};
use crate::highlight::Token;
use crate::position::Position;

/// A complete language definition for syntax highlighting
#[derive(Debug)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// File extensions (e.g., ["rs"], ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Single-line pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    /// Multi-line rules for comments, strings, etc.
    pub multiline_rules: Vec<MultilineRule>,
}

/// Next thing the lexer found on a line
enum Candidate<'a> {
    Multiline { start: usize, open_end: usize, rule: &'a MultilineRule },
    Pattern { start: usize, end: usize, rule: &'a PatternRule },
}

impl Candidate<'_> {
    fn start(&self) -> usize {
        match self {
            Candidate::Multiline { start, .. } | Candidate::Pattern { start, .. } => *start,
        }
    }
}

/// Last search result for one rule on the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CachedMatch {
    Unsearched,
    Never,
    At(usize, usize),
}

impl CachedMatch {
    /// Reuse the stored match while it still lies at or after `pos`
    ///
    /// A match starting at or after `pos` is also the first one a fresh
    /// search from `pos` would find, and a rule that found nothing stays
    /// empty for the rest of the line.
    fn lookup(
        &mut self,
        pos: usize,
        searches: &mut usize,
        search: impl FnOnce(usize) -> Option<(usize, usize)>,
    ) -> Option<(usize, usize)> {
        match *self {
            CachedMatch::Never => return None,
            CachedMatch::At(start, end) if start >= pos => return Some((start, end)),
            _ => {}
        }
        *searches += 1;
        let found = search(pos);
        *self = match found {
            Some((start, end)) => CachedMatch::At(start, end),
            None => CachedMatch::Never,
        };
        found
    }
}

/// Per-line memo of every rule's next match
///
/// Keeps a long line linear: rules are only searched again once the
/// lexer has moved past their previous match.
#[derive(Debug)]
struct MatchCache {
    multiline: Vec<CachedMatch>,
    patterns: Vec<CachedMatch>,
    searches: usize,
}

impl MatchCache {
    fn new(lang: &LanguageDefinition) -> Self {
        Self {
            multiline: vec![CachedMatch::Unsearched; lang.multiline_rules.len()],
            patterns: vec![CachedMatch::Unsearched; lang.patterns.len()],
            searches: 0,
        }
    }

    /// Forget all matches before starting a new line
    fn reset(&mut self) {
        self.multiline.fill(CachedMatch::Unsearched);
        self.patterns.fill(CachedMatch::Unsearched);
    }
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            patterns: Vec::new(),
            multiline_rules: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first); sort is stable so
        // equal priorities stay in insertion order
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a multiline rule
    pub fn add_multiline(&mut self, rule: MultilineRule) {
        self.multiline_rules.push(rule);
    }

    /// Get multiline rule by state ID
    fn get_multiline_rule(&self, state_id: u8) -> Option<&MultilineRule> {
        self.multiline_rules.iter().find(|r| r.state_id == state_id)
    }

    /// Earliest match at or after `pos`
    ///
    /// On a tie multiline constructs win, then higher priority patterns.
    fn next_candidate<'a>(
        &'a self,
        text: &[u8],
        pos: usize,
        cache: &mut MatchCache,
    ) -> Option<Candidate<'a>> {
        let MatchCache { multiline, patterns, searches } = cache;
        let mut best: Option<Candidate<'a>> = None;

        for (rule, slot) in self.multiline_rules.iter().zip(multiline.iter_mut()) {
            if let Some((start, open_end)) = slot.lookup(pos, searches, |from| rule.find_start(text, from)) {
                if best.as_ref().map_or(true, |b| start < b.start()) {
                    best = Some(Candidate::Multiline { start, open_end, rule });
                }
            }
        }
        for (rule, slot) in self.patterns.iter().zip(patterns.iter_mut()) {
            if let Some((start, end)) = slot.lookup(pos, searches, |from| rule.find_at(text, from)) {
                if best.as_ref().map_or(true, |b| start < b.start()) {
                    best = Some(Candidate::Pattern { start, end, rule });
                }
            }
        }
        best
    }

    /// Tokenize a single line
    ///
    /// Takes the line bytes (without its newline), its 1-based line
    /// number and the state from the previous line. Pushes tokens and
    /// returns the state for the next line.
    pub fn tokenize_line(
        &self,
        text: &[u8],
        line: usize,
        prev_state: LineState,
        tokens: &mut Vec<Token>,
    ) -> LineState {
        let mut cache = MatchCache::new(self);
        self.tokenize_line_cached(text, line, prev_state, tokens, &mut cache)
    }

    fn tokenize_line_cached(
        &self,
        text: &[u8],
        line: usize,
        prev_state: LineState,
        tokens: &mut Vec<Token>,
        cache: &mut MatchCache,
    ) -> LineState {
        cache.reset();
        let mut emit = |start: usize, end: usize, category: HighlightCategory| {
            tokens.push(Token::new(
                Position::new(line, start),
                Position::new(line, end),
                category,
            ));
        };

        let mut pos = 0;
        let mut state = prev_state;

        while pos < text.len() {
            // If inside a multiline construct, look for its end
            if state.is_inside_multiline() {
                match self.get_multiline_rule(state.multiline_id) {
                    Some(rule) => match rule.find_end(text, pos) {
                        Some(end) => {
                            emit(pos, end, rule.category);
                            pos = end;
                            state = LineState::default();
                            continue;
                        }
                        None => {
                            // Rest of line is inside this construct
                            emit(pos, text.len(), rule.category);
                            return state;
                        }
                    },
                    // Invalid state - reset
                    None => state = LineState::default(),
                }
            }

            match self.next_candidate(text, pos, cache) {
                Some(Candidate::Multiline { start, open_end, rule }) => {
                    match rule.find_end(text, open_end) {
                        Some(close) => {
                            emit(start, close, rule.category);
                            pos = close;
                        }
                        None => {
                            emit(start, text.len(), rule.category);
                            return LineState::inside(rule.state_id);
                        }
                    }
                }
                Some(Candidate::Pattern { start, end, rule }) => {
                    emit(start, end, rule.category);
                    pos = end;
                }
                None => break,
            }
        }

        state
    }

    /// Tokenize a whole buffer
    ///
    /// Tokens come out in source order with positions that match the
    /// buffer byte for byte. A multiline construct yields one token per
    /// physical line it covers.
    pub fn tokenize(&self, data: &[u8]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut cache = MatchCache::new(self);
        let mut state = LineState::default();
        for (idx, text) in data.split(|&b| b == b'\n').enumerate() {
            state = self.tokenize_line_cached(text, idx + 1, state, &mut tokens, &mut cache);
        }
        tokens
    }

    /// Parse a language definition from TOML
    ///
    /// ```text
    /// [language]
    /// name = "Lua"
    /// extensions = ["lua"]
    ///
    /// [[pattern]]
    /// name = "keyword"
    /// regex = '\b(if|then|end)\b'
    /// category = "Control"
    /// priority = 80
    ///
    /// [[multiline]]
    /// name = "block_comment"
    /// start = '--\[\['
    /// end = '\]\]'
    /// category = "Comment"
    /// ```
    pub fn from_toml(source: &str) -> Result<Self> {
        let table: Table = source
            .parse()
            .map_err(|e: toml::de::Error| HighlightError::Language(e.to_string()))?;

        let header = table
            .get("language")
            .and_then(Value::as_table)
            .ok_or_else(|| HighlightError::Language("missing [language] table".to_string()))?;
        let mut lang = LanguageDefinition::new(required_str(header, "name", "language")?);

        if let Some(exts) = header.get("extensions").and_then(Value::as_array) {
            for ext in exts.iter().filter_map(Value::as_str) {
                lang.add_extension(ext);
            }
        }

        for entry in array_of_tables(&table, "pattern")? {
            let name = required_str(entry, "name", "pattern")?;
            let priority = entry
                .get("priority")
                .and_then(Value::as_integer)
                .unwrap_or(0);
            let priority = i32::try_from(priority)
                .map_err(|_| HighlightError::Language(format!("rule '{}': priority out of range", name)))?;
            lang.add_pattern(PatternRule::new(
                name,
                required_str(entry, "regex", name)?,
                required_category(entry, name)?,
                priority,
            )?);
        }

        for (idx, entry) in array_of_tables(&table, "multiline")?.into_iter().enumerate() {
            let name = required_str(entry, "name", "multiline")?;
            let state_id = u8::try_from(idx + 1)
                .map_err(|_| HighlightError::Language("too many multiline rules".to_string()))?;
            let mut rule = MultilineRule::new(
                name,
                required_str(entry, "start", name)?,
                required_str(entry, "end", name)?,
                required_category(entry, name)?,
                state_id,
            )?;
            if let Some(escape) = entry.get("escape").and_then(Value::as_str) {
                match escape.as_bytes() {
                    [byte] => rule = rule.with_escape(*byte),
                    _ => {
                        return Err(HighlightError::Language(format!(
                            "rule '{}': escape must be a single byte",
                            name
                        )))
                    }
                }
            }
            lang.add_multiline(rule);
        }

        Ok(lang)
    }
}

fn required_str<'a>(table: &'a Table, key: &str, context: &str) -> Result<&'a str> {
    table
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| HighlightError::Language(format!("{}: missing string '{}'", context, key)))
}

fn required_category(table: &Table, context: &str) -> Result<HighlightCategory> {
    let name = required_str(table, "category", context)?;
    HighlightCategory::from_name(name)
        .ok_or_else(|| HighlightError::Language(format!("{}: unknown category '{}'", context, name)))
}

fn array_of_tables<'a>(table: &'a Table, key: &str) -> Result<Vec<&'a Table>> {
    let Some(value) = table.get(key) else {
        return Ok(Vec::new());
    };
    let array = value
        .as_array()
        .ok_or_else(|| HighlightError::Language(format!("'{}' must be an array of tables", key)))?;
    array
        .iter()
        .map(|v| {
            v.as_table()
                .ok_or_else(|| HighlightError::Language(format!("'{}' entries must be tables", key)))
        })
        .collect()
}

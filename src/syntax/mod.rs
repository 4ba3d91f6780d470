//! Syntax module
//!
//! This module provides everything the colorizer needs to know about
//! tokens:
//! - Highlight categories and their fixed colors
//! - SGR escape emission and protection markers
//! - A regex-driven lexer with built-in and TOML-defined languages

mod builtin;
mod category;
mod color;
pub mod escape;
mod language;
mod registry;
mod rules;

pub use category::HighlightCategory;
pub use color::ColorDescriptor;
pub use escape::{strip_protected, strip_sgr};
pub use language::LanguageDefinition;
pub use registry::LanguageRegistry;
pub use rules::{LineState, MultilineRule, PatternRule};

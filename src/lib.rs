//! hilite - terminal syntax coloring by token replay
//!
//! Walks a source buffer in lockstep with a token stream and writes it
//! back out with ANSI SGR escapes around each token. Every byte of the
//! input survives unchanged; only decoration is added.

pub mod config;
pub mod cursor;
pub mod error;
pub mod highlight;
pub mod position;
pub mod syntax;

pub use config::Config;
pub use cursor::ReplayCursor;
pub use error::{HighlightError, Result};
pub use highlight::{highlight, highlight_to_vec, Token, TokenSource};
pub use position::Position;
pub use syntax::{ColorDescriptor, HighlightCategory, LanguageDefinition, LanguageRegistry};

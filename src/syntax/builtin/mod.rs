//! Built-in language definitions
//!
//! This module provides lexer definitions for common programming
//! languages.

mod c;
mod javascript;
mod python;
mod rust;

use super::language::LanguageDefinition;
use crate::error::Result;

/// Get all built-in language definitions
pub fn all_languages() -> Result<Vec<LanguageDefinition>> {
    Ok(vec![
        javascript::javascript_language()?,
        c::c_language()?,
        rust::rust_language()?,
        python::python_language()?,
    ])
}

//! Language registry
//!
//! This module provides the LanguageRegistry that holds the built-in
//! and user-supplied language definitions and picks one for a file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::builtin;
use super::language::LanguageDefinition;
use crate::error::Result;

/// Known languages, keyed by lowercase name
pub struct LanguageRegistry {
    /// Loaded language definitions
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language key mapping
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Create a registry with the built-in languages
    pub fn new() -> Result<Self> {
        let mut registry = Self::empty();
        for lang in builtin::all_languages()? {
            registry.add_language(lang);
        }
        Ok(registry)
    }

    /// Add a language definition, replacing any with the same name
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let key = lang.name.to_lowercase();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), key.clone());
        }
        self.languages.insert(key, lang);
    }

    /// Load every `*.toml` definition in a directory
    ///
    /// Returns how many were loaded. A file that fails to parse aborts
    /// the load.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        for path in &paths {
            let source = fs::read_to_string(path)?;
            let lang = LanguageDefinition::from_toml(&source).inspect_err(|e| {
                warn!(path = %path.display(), "bad language definition: {e}");
            })?;
            debug!(path = %path.display(), name = %lang.name, "loaded language");
            self.add_language(lang);
        }
        Ok(paths.len())
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&LanguageDefinition> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        let key = self.extension_map.get(&ext)?;
        self.languages.get(key)
    }

    /// Get a language definition by name, ignoring case
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(&name.to_lowercase())
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.values().map(|l| l.name.as_str()).collect();
        names.sort();
        names
    }
}

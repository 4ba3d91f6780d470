//! Configuration file support
//!
//! Loads settings from ~/.hilite.conf (or %USERPROFILE%\.hilite.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # hilite configuration
//! protect = false
//! color = true
//! default-language = javascript
//! language-dir = /home/me/.config/hilite/languages
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Wrap injected escapes in protection markers
    pub protect: bool,
    /// Emit color at all; off means plain passthrough
    pub color: bool,
    /// Language used when none is given and the extension is unknown
    pub default_language: Option<String>,
    /// Directory of extra TOML language definitions
    pub language_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protect: false,
            color: true,
            default_language: None,
            language_dir: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.conf"))
        }
    }

    /// Load configuration from file
    ///
    /// A missing or unreadable file leaves the defaults in place.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                debug!(path = %path.display(), "loading config");
                config.apply(&Self::parse(&contents));
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("protect") {
            self.protect = parse_bool(value);
        }

        if let Some(value) = settings.get("color") {
            self.color = parse_bool(value);
        }

        if let Some(value) = settings.get("default-language") {
            self.default_language = (!value.is_empty()).then(|| value.clone());
        }

        if let Some(value) = settings.get("language-dir") {
            self.language_dir = (!value.is_empty()).then(|| PathBuf::from(value));
        }
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}

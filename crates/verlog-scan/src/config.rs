//! Tracking configuration: which files verlog follows.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extensions tracked when no configuration file exists.
const DEFAULT_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".csv", ".log", ".py", ".js", ".sh", ".html", ".css", ".c", ".java", ".json",
    ".yaml", ".yml", ".ini", ".toml", ".xml", ".rtf", ".go", ".rs",
];

/// Patterns ignored when no configuration file exists.
const DEFAULT_IGNORE_PATTERNS: &[&str] = &["*.tmp", "*.bak"];

/// File-extension allowlist and ignore patterns, persisted as
/// `config.json` inside the state directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extensions (with leading dot) of files to track.
    pub extensions: Vec<String>,
    /// Ignore patterns: globs, `dir/*` directory patterns, or exact file
    /// names.
    pub ignore_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load the configuration from `path`.
    ///
    /// Falls back to the defaults when the file is missing, malformed, or
    /// lists no extensions, so a broken config degrades tracking rather
    /// than breaking it.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no config file; using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<Config>(&text) {
            Ok(config) if !config.extensions.is_empty() => config,
            Ok(_) => {
                debug!(path = %path.display(), "config lists no extensions; using defaults");
                Self::default()
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "malformed config; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_track_common_text_extensions() {
        let config = Config::default();
        for ext in [".txt", ".md", ".rs", ".go", ".py"] {
            assert!(config.extensions.iter().any(|e| e == ext), "missing {ext}");
        }
        assert_eq!(config.ignore_patterns, vec!["*.tmp", "*.bak"]);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn empty_extension_list_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extensions":[],"ignore_patterns":["x"]}"#).unwrap();
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn valid_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            extensions: vec![".txt".into()],
            ignore_patterns: vec!["build/*".into()],
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(Config::load_or_default(&path), config);
    }
}

//! Configuration file parser for newswire.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields`
//! off), though we log a warning when the file contains potential typos.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified. Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the CORS relay that fetches feeds on our behalf.
    pub relay_url: String,

    /// Per-feed fetch timeout in seconds. Bounds one slow source, not the
    /// whole cycle — the other fetches proceed independently.
    pub fetch_timeout_secs: u64,

    /// Minutes between aggregation cycles when running continuously.
    pub refresh_interval_minutes: u64,

    /// Catalog ids of the sources enabled at startup. Empty list means
    /// the aggregator falls back to its default feed set.
    pub enabled_sources: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay_url: "https://api.allorigins.win".to_string(),
            fetch_timeout_secs: 15,
            refresh_interval_minutes: 5,
            enabled_sources: Vec::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB) — checked before reading so a
    /// corrupted file cannot exhaust memory.
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse as a raw table first to flag likely typos
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = [
                "relay_url",
                "fetch_timeout_secs",
                "refresh_interval_minutes",
                "enabled_sources",
            ];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            relay = %config.relay_url,
            enabled = config.enabled_sources.len(),
            "Loaded configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.relay_url, "https://api.allorigins.win");
        assert_eq!(config.fetch_timeout_secs, 15);
        assert_eq!(config.refresh_interval_minutes, 5);
        assert!(config.enabled_sources.is_empty());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/newswire_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.refresh_interval_minutes, 5);
    }

    #[test]
    fn test_empty_file_returns_default() {
        let dir = std::env::temp_dir().join("newswire_config_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("newswire.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fetch_timeout_secs, 15);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let dir = std::env::temp_dir().join("newswire_config_test_partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("newswire.toml");
        std::fs::write(&path, "fetch_timeout_secs = 5\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.relay_url, "https://api.allorigins.win"); // default
        assert_eq!(config.refresh_interval_minutes, 5); // default

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let dir = std::env::temp_dir().join("newswire_config_test_full");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("newswire.toml");

        let content = r#"
relay_url = "https://relay.example.com"
fetch_timeout_secs = 30
refresh_interval_minutes = 10
enabled_sources = ["bbc_asia", "japan_times"]
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.relay_url, "https://relay.example.com");
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.refresh_interval_minutes, 10);
        assert_eq!(config.enabled_sources, vec!["bbc_asia", "japan_times"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let dir = std::env::temp_dir().join("newswire_config_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("newswire.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let dir = std::env::temp_dir().join("newswire_config_test_unknown");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("newswire.toml");

        std::fs::write(&path, "relay_url = \"https://r.example.com\"\ntotally_fake_key = 42\n")
            .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.relay_url, "https://r.example.com");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_type_returns_error() {
        let dir = std::env::temp_dir().join("newswire_config_test_wrongtype");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("newswire.toml");
        // fetch_timeout_secs should be an integer, not a string
        std::fs::write(&path, "fetch_timeout_secs = \"soon\"\n").unwrap();

        assert!(Config::load(&path).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_too_large_file_rejected() {
        let dir = std::env::temp_dir().join("newswire_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("newswire.toml");

        let content = "a".repeat(1_048_577);
        std::fs::write(&path, content).unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::TooLarge(_))));

        std::fs::remove_dir_all(&dir).ok();
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Configuration is read from a YAML file and then adjusted from
//! `HAWKWATCH_*` environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "hawkwatch.yaml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Directory holding the stored records
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Hosted auth service; auth commands are unavailable without it
    #[serde(default)]
    pub backend: Option<BackendConfig>,
}

/// Hosted backend connection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`
    pub url: String,
    /// Public anonymous API key
    pub anon_key: String,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("hawkwatch-data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            log_level: default_log_level(),
            backend: None,
        }
    }
}

impl Config {
    /// Apply environment overrides. `lookup` returns the value of a
    /// variable, if set.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("HAWKWATCH_STORAGE_DIR") {
            self.storage_dir = PathBuf::from(dir);
        }

        let url = lookup("HAWKWATCH_BACKEND_URL");
        let anon_key = lookup("HAWKWATCH_ANON_KEY");
        if let Some(backend) = self.backend.as_mut() {
            if let Some(url) = url {
                backend.url = url;
            }
            if let Some(anon_key) = anon_key {
                backend.anon_key = anon_key;
            }
        } else if let (Some(url), Some(anon_key)) = (url, anon_key) {
            self.backend = Some(BackendConfig { url, anon_key });
        }
    }
}

/// Parse configuration from YAML text.
pub fn parse_config(text: &str) -> Result<Config> {
    // An empty file is valid and means "all defaults".
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(text).context("Failed to parse YAML config")
}

/// Load configuration from a file or use defaults, then apply
/// environment overrides.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
/// read if present.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => read_config_file(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config_file(path)?
            } else {
                log::debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                Config::default()
            }
        }
    };

    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            "storage_dir: /var/lib/hawkwatch\n\
             log_level: debug\n\
             backend:\n  url: https://example.supabase.co\n  anon_key: public-key\n",
        )
        .unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/hawkwatch"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.backend.unwrap().url, "https://example.supabase.co");
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert_eq!(parse_config("log_level: warn").unwrap().storage_dir, default_storage_dir());
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        assert!(parse_config("storage_dir: [unclosed").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(env(&[
            ("HAWKWATCH_STORAGE_DIR", "/tmp/hw"),
            ("HAWKWATCH_BACKEND_URL", "https://env.example"),
            ("HAWKWATCH_ANON_KEY", "env-key"),
        ]));

        assert_eq!(config.storage_dir, PathBuf::from("/tmp/hw"));
        assert_eq!(
            config.backend,
            Some(BackendConfig {
                url: "https://env.example".to_string(),
                anon_key: "env-key".to_string(),
            })
        );
    }

    #[test]
    fn test_env_needs_both_backend_values() {
        let mut config = Config::default();
        config.apply_env(env(&[("HAWKWATCH_BACKEND_URL", "https://env.example")]));
        assert_eq!(config.backend, None);
    }

    #[test]
    fn test_env_overrides_single_backend_field() {
        let mut config = parse_config("backend:\n  url: https://file.example\n  anon_key: file-key\n").unwrap();
        config.apply_env(env(&[("HAWKWATCH_ANON_KEY", "env-key")]));

        let backend = config.backend.unwrap();
        assert_eq!(backend.url, "https://file.example");
        assert_eq!(backend.anon_key, "env-key");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hawkwatch.yaml");
        std::fs::write(&path, "log_level: trace\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.log_level, "trace");

        assert!(load_config(Some(&dir.path().join("missing.yaml"))).is_err());
    }
}

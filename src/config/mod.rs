use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable holding the asset base URL
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Base URL used when `BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    pub base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Build settings around an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            assets: AssetsConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = match std::env::var(BASE_URL_VAR) {
            Ok(value) => value,
            Err(VarError::NotPresent) => DEFAULT_BASE_URL.to_string(),
            Err(VarError::NotUnicode(_)) => {
                return Err(Error::Config(format!(
                    "Invalid {BASE_URL_VAR} value: not valid unicode"
                )))
            }
        };

        let settings = Self::with_base_url(base_url);
        settings.check();
        Ok(settings)
    }

    /// Load settings from a dotenv file without touching the process environment.
    /// Keys missing from the file fall back to `from_env`.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut base_url = None;

        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            if key == BASE_URL_VAR {
                base_url = Some(value);
            }
        }

        let settings = match base_url {
            Some(base_url) => {
                debug!("{} loaded from {}", BASE_URL_VAR, path.display());
                Self::with_base_url(base_url)
            }
            None => {
                debug!(
                    "{} not set in {}, using process environment",
                    BASE_URL_VAR,
                    path.display()
                );
                return Self::from_env();
            }
        };

        settings.check();
        Ok(settings)
    }

    /// Replace the base URL, e.g. from a command-line flag
    pub fn override_base_url(&mut self, base_url: impl Into<String>) {
        self.assets.base_url = base_url.into();
        self.check();
    }

    /// Flag base URLs that will glue onto paths without a separator.
    /// Resolution still proceeds with the value as given.
    fn check(&self) {
        let base_url = &self.assets.base_url;
        if !base_url.is_empty() && !base_url.ends_with('/') {
            warn!(
                "{} '{}' has no trailing slash; resolved paths will be joined directly",
                BASE_URL_VAR, base_url
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_base_url() {
        let settings = Settings::default();
        assert_eq!(settings.assets.base_url, "/");
    }

    #[test]
    fn test_with_base_url_keeps_value_verbatim() {
        let settings = Settings::with_base_url("");
        assert_eq!(settings.assets.base_url, "");

        let settings = Settings::with_base_url("https://cdn.example.com/app");
        assert_eq!(settings.assets.base_url, "https://cdn.example.com/app");
    }

    #[test]
    fn test_override_base_url() {
        let mut settings = Settings::default();

        settings.override_base_url("/cli");
        assert_eq!(settings.assets.base_url, "/cli");

        settings.override_base_url("");
        assert_eq!(settings.assets.base_url, "");
    }

    #[test]
    fn test_from_env_file_reads_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# deployment settings").unwrap();
        writeln!(file, "OTHER=1").unwrap();
        writeln!(file, "BASE_URL=/app/").unwrap();

        let settings = Settings::from_env_file(file.path()).unwrap();
        assert_eq!(settings.assets.base_url, "/app/");
    }

    #[test]
    fn test_from_env_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::from_env_file(dir.path().join("missing.env"));
        assert!(matches!(result, Err(Error::EnvFile(_))));
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings::with_base_url("/app/");
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"assets":{"base_url":"/app/"}}"#);

        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}

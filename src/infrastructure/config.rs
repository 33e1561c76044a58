//! Runtime configuration sourced from the environment.
//!
//! The API credential is deliberately never embedded in the binary; it
//! must be supplied via `GEMINI_API_KEY`. The endpoint can be overridden
//! with `LIFELENS_API_URL` for local experimentation.

use std::env;

const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `GEMINI_API_KEY` is unset or blank. Checked before the
    /// terminal enters raw mode so the message stays readable.
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_vars(
            env::var("GEMINI_API_KEY").ok(),
            env::var("LIFELENS_API_URL").ok(),
        )
    }

    fn from_vars(api_key: Option<String>, api_url: Option<String>) -> Result<Config, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let api_url = api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(Config { api_url, api_key })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingApiKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingApiKey => {
                write!(f, "GEMINI_API_KEY is not set; export it before starting")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_an_error() {
        assert_eq!(
            Config::from_vars(None, None).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn test_blank_key_is_an_error() {
        assert_eq!(
            Config::from_vars(Some("   ".to_string()), None).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn test_default_endpoint_is_used_without_override() {
        let config = Config::from_vars(Some("k".to_string()), None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn test_endpoint_override_wins() {
        let config = Config::from_vars(
            Some("k".to_string()),
            Some("http://localhost:8080/generate".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/generate");
    }
}

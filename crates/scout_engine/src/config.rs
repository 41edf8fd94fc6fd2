use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Bearer credential for the remote service. Required.
pub const API_KEY_VAR: &str = "API_KEY";
/// Base URL override for the remote service.
pub const API_URL_VAR: &str = "FIRECRAWL_API_URL";
/// Directory result files are written to. Defaults to the working directory.
pub const OUTPUT_DIR_VAR: &str = "SCOUT_OUTPUT_DIR";

pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} not found in environment variables")]
    MissingCredential { var: &'static str },
    #[error("{var} is not a valid base url ({value}): {reason}")]
    InvalidApiUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for one process run, built once at startup and passed down.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub output_dir: PathBuf,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is normal; variables may come from the shell.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingCredential { var: API_KEY_VAR })?;

        let api_url = match lookup(API_URL_VAR).filter(|value| !value.trim().is_empty()) {
            Some(value) => validate_api_url(value.trim())?,
            None => DEFAULT_API_URL.to_string(),
        };

        let output_dir = lookup(OUTPUT_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            api_key,
            api_url,
            output_dir,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

fn validate_api_url(value: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(value).map_err(|err| ConfigError::InvalidApiUrl {
        var: API_URL_VAR,
        value: value.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl {
            var: API_URL_VAR,
            value: value.to_string(),
            reason: format!("unsupported scheme {}", parsed.scheme()),
        });
    }
    Ok(value.trim_end_matches('/').to_string())
}

//! Endpoint configuration: environment variables first, optional TOML file.
//!
//! The API credential is private — it is read from the environment (after a
//! `.env` pass) or a local config file, never baked into the crate.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Default public endpoint base.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Client timeout applied when the environment does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const API_URL_VAR: &str = "GEMINI_API_URL";
const TIMEOUT_VAR: &str = "KEYSTONE_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variables: {0}")]
    MissingEnvironment(String),
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Everything the relay needs to reach the completion endpoint.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_url: Url,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Build a config for the default public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: default_api_url(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from the environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        validate_environment()?;

        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| ConfigError::MissingEnvironment(API_KEY_VAR.to_string()))?;
        let api_url = match env::var(API_URL_VAR) {
            Ok(raw) => Url::parse(&raw)?,
            Err(_) => default_api_url(),
        };
        let timeout_secs = env::var(TIMEOUT_VAR)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            api_key,
            timeout_secs,
        })
    }

    /// Load from a TOML file with the same fields as the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct FileConfig {
            api_key: String,
            api_url: Option<String>,
            timeout_secs: Option<u64>,
        }

        let raw = fs::read_to_string(path.as_ref())?;
        let file: FileConfig = toml::from_str(&raw)?;

        let api_url = match file.api_url {
            Some(raw) => Url::parse(&raw)?,
            None => default_api_url(),
        };

        Ok(Self {
            api_url,
            api_key: file.api_key,
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

/// Check that the required variables are set, reporting the missing set by
/// name so deployment mistakes are obvious.
pub fn validate_environment() -> Result<(), ConfigError> {
    let required_vars = [API_KEY_VAR];
    let mut missing_vars = Vec::new();

    for var in &required_vars {
        if env::var(var).is_err() {
            missing_vars.push(*var);
        }
    }

    if missing_vars.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingEnvironment(missing_vars.join(", ")))
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("default endpoint URL is valid")
}

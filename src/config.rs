//! Configuration management for the PDF text server

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Origin allowed when nothing else is configured (local front-end dev server)
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Cross-origin policy. Credentials, methods and headers are always
/// permitted; only the origin list is configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionConfig {
    /// Per-request extraction deadline. `None` lets extraction run to completion.
    pub timeout_secs: Option<u64>,
    /// Request body cap in bytes. `None` disables the limit.
    pub max_upload_bytes: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            },
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => defaults.cors.allowed_origins,
        };

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_opt(&lookup, "SERVER_PORT")?.unwrap_or(defaults.server.port),
            },
            cors: CorsConfig { allowed_origins },
            extraction: ExtractionConfig {
                timeout_secs: parse_opt::<u64, _>(&lookup, "EXTRACT_TIMEOUT_SECS")?
                    .filter(|s| *s > 0),
                max_upload_bytes: parse_opt(&lookup, "MAX_UPLOAD_BYTES")?,
            },
        })
    }
}

fn parse_opt<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

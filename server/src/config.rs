//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// YAML user directory; the built-in seed is used when absent.
    pub users_file: Option<PathBuf>,
    /// Built client bundle served as the router fallback.
    pub static_dir: Option<PathBuf>,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 5000
    /// - `DATAENTRY_USERS_FILE`: YAML directory path
    /// - `DATAENTRY_STATIC_DIR`: client bundle directory
    /// - `CORS_ALLOW_ORIGIN`: single allowed origin, `*` for any
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as `from_env`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let users_file = non_empty("DATAENTRY_USERS_FILE").map(PathBuf::from);
        let static_dir = non_empty("DATAENTRY_STATIC_DIR").map(PathBuf::from);
        let cors_origin = non_empty("CORS_ALLOW_ORIGIN").filter(|v| v != "*");

        Ok(Self { host, port, users_file, static_dir, cors_origin })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `ServerConfig::from_env` is the only place that touches the process
//! environment. Parsing goes through `from_lookup` so tests can feed a map
//! instead of mutating global env state.

use std::path::PathBuf;

use contract::ApiInfo;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_APP_NAME: &str = "spec-kit-project-test";
pub const DEFAULT_APP_VERSION: &str = "0.0.0";
pub const DEFAULT_APP_DESCRIPTION: &str = "Leptos + Axum application with Rust server";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the prebuilt UI bundle (`index.html` + assets).
    pub dist_dir: PathBuf,
    /// Values reported by `GET /api/info`.
    pub info: ApiInfo,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3001
    /// - `HOST`: default `0.0.0.0`
    /// - `APP_ENV` / `NODE_ENV`: default `development`
    /// - `APP_NAME`, `APP_VERSION`, `APP_DESCRIPTION`
    /// - `DIST_DIR`: default `../client/dist` relative to this crate
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let environment = get("APP_ENV")
            .or_else(|| get("NODE_ENV"))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());
        let dist_dir = get("DIST_DIR").map_or_else(default_dist_dir, PathBuf::from);

        let info = ApiInfo {
            name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_owned()),
            version: get("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_owned()),
            description: get("APP_DESCRIPTION").unwrap_or_else(|| DEFAULT_APP_DESCRIPTION.to_owned()),
            environment,
        };

        Ok(Self { host, port, dist_dir, info })
    }

    /// Path of the UI entry document inside the bundle directory.
    #[must_use]
    pub fn index_html(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

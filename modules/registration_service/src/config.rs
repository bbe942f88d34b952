//! Configuration for registration service

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for overrides (e.g. `REGISTRATION_BIND_ADDR`)
pub const ENV_PREFIX: &str = "REGISTRATION_";

/// Keys read from the environment; other `REGISTRATION_*` variables are ignored
const ENV_KEYS: &[&str] = &[
    "bind_addr",
    "database_url",
    "jwt_secret",
    "max_body_size",
    "log_level",
    "log_json",
];

/// Registration service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Database connection string (postgres:// or sqlite:)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// HS256 secret used to verify login tokens
    #[serde(default)]
    pub jwt_secret: String,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: default_database_url(),
            jwt_secret: String::new(),
            max_body_size: default_max_body_size(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the optional YAML file, then env
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
            .extract()?;
        Ok(config)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_body_size() -> usize {
    64 * 1024 // 64KB
}

fn default_log_level() -> String {
    "info".to_string()
}

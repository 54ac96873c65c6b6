//! Application config, read from `config/base.toml` with environment overlays.
use std::env;

use ::config::{Config as RawConfig, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub thread_count: usize,
    pub database: Database,
    pub uploads: Uploads,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Uploads {
    /// Directory the blobs are written into.
    pub path: String,
    /// Public path prefix recorded in image rows.
    pub prefix: String,
}

impl Config {
    /// Creates config from base.toml, overwritten by <RUN_MODE>.toml and
    /// CATALOG_* environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Config::with_env(env)
    }

    pub fn with_env(env: impl Into<String>) -> Result<Self, ConfigError> {
        let mut s = RawConfig::new();

        s.merge(File::with_name("config/base"))?;
        s.merge(File::with_name(&format!("config/{}", env.into())).required(false))?;
        s.merge(Environment::with_prefix("CATALOG"))?;
        s.try_into()
    }
}

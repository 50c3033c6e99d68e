//! Environment configuration
//!
//! Every setting has a default; a `.env` file is honored when present.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use salesdash_core::logging_facility::Profile;
use salesdash_store::seed::DEFAULT_FEED_URL;
use thiserror::Error;

pub const ENV_ADDR: &str = "SALESDASH_ADDR";
pub const ENV_STORE: &str = "SALESDASH_STORE";
pub const ENV_DB_PATH: &str = "SALESDASH_DB_PATH";
pub const ENV_SEED_URL: &str = "SALESDASH_SEED_URL";
pub const ENV_SEED_TIMEOUT_SECS: &str = "SALESDASH_SEED_TIMEOUT_SECS";
pub const ENV_SEED_ON_STARTUP: &str = "SALESDASH_SEED_ON_STARTUP";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "SALESDASH_REQUEST_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "SALESDASH_LOG_FORMAT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Which `RecordStore` backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store '{}': expected 'sqlite' or 'memory'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub store: StoreBackend,
    pub db_path: PathBuf,
    pub seed_url: String,
    pub seed_timeout: Duration,
    /// Reseed at boot; failure is logged and the server starts anyway
    pub seed_on_startup: bool,
    pub request_timeout: Duration,
    pub log_profile: Profile,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            store: StoreBackend::Sqlite,
            db_path: PathBuf::from(".salesdash/store.db"),
            seed_url: DEFAULT_FEED_URL.to_string(),
            seed_timeout: Duration::from_secs(30),
            seed_on_startup: true,
            request_timeout: Duration::from_secs(60),
            log_profile: Profile::Development,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first malformed variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            addr: try_load(ENV_ADDR, var(ENV_ADDR))?.unwrap_or(defaults.addr),
            store: try_load(ENV_STORE, var(ENV_STORE))?.unwrap_or(defaults.store),
            db_path: var(ENV_DB_PATH).map(PathBuf::from).unwrap_or(defaults.db_path),
            seed_url: var(ENV_SEED_URL).unwrap_or(defaults.seed_url),
            seed_timeout: load_secs(ENV_SEED_TIMEOUT_SECS, var(ENV_SEED_TIMEOUT_SECS))?
                .unwrap_or(defaults.seed_timeout),
            seed_on_startup: load_flag(ENV_SEED_ON_STARTUP, var(ENV_SEED_ON_STARTUP))?
                .unwrap_or(defaults.seed_on_startup),
            request_timeout: load_secs(ENV_REQUEST_TIMEOUT_SECS, var(ENV_REQUEST_TIMEOUT_SECS))?
                .unwrap_or(defaults.request_timeout),
            log_profile: try_load(ENV_LOG_FORMAT, var(ENV_LOG_FORMAT))?
                .unwrap_or(defaults.log_profile),
        })
    }
}

fn invalid(key: &'static str, value: &str, reason: impl Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn try_load<T: FromStr>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T::Err: Display,
{
    raw.map(|value| value.trim().parse().map_err(|e| invalid(key, &value, e)))
        .transpose()
}

fn load_secs(key: &'static str, raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    match try_load::<u64>(key, raw.clone())? {
        Some(0) => Err(invalid(key, "0", "must be at least 1 second")),
        Some(secs) => Ok(Some(Duration::from_secs(secs))),
        None => Ok(None),
    }
}

fn load_flag(key: &'static str, raw: Option<String>) -> Result<Option<bool>, ConfigError> {
    raw.map(|value| match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, &value, "expected true or false")),
    })
    .transpose()
}

//! Runtime configuration loaded from environment variables (or `.env`)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for availability checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub rdap_timeout: Duration,
    pub enable_rdap: bool,
    pub enable_dns: bool,
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            rdap_timeout: Duration::from_secs(10),
            enable_rdap: true,
            enable_dns: true,
            user_agent: format!("domain-generator/{}", crate::VERSION),
        }
    }
}

/// Configuration for name generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Strategy draws per default-mode name before falling back to a bare base word
    pub strategy_retries: usize,
    /// Fixed cap on candidate draws per batch; `None` scales with the requested count
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strategy_retries: 20,
            max_attempts: None,
        }
    }
}

impl GeneratorConfig {
    /// Attempt cap for a batch of `count` unique names
    pub fn attempt_cap(&self, count: usize) -> usize {
        self.max_attempts
            .unwrap_or_else(|| count.saturating_mul(50).max(1000))
    }
}

/// Configuration for the find-available search loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_rounds: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_rounds: 100 }
    }
}

/// All settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub check: CheckConfig,
    pub generator: GeneratorConfig,
    pub search: SearchConfig,
    pub store_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the environment, reading `.env` first if present.
    ///
    /// Unset variables keep their defaults; unparsable ones are errors.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(secs) = parse_var::<u64, _>(&lookup, "DOMAIN_GEN_RDAP_TIMEOUT_SECS")? {
            settings.check.rdap_timeout = Duration::from_secs(secs);
        }
        if let Some(enabled) = parse_flag(&lookup, "DOMAIN_GEN_ENABLE_RDAP")? {
            settings.check.enable_rdap = enabled;
        }
        if let Some(enabled) = parse_flag(&lookup, "DOMAIN_GEN_ENABLE_DNS")? {
            settings.check.enable_dns = enabled;
        }
        if let Some(retries) = parse_var(&lookup, "DOMAIN_GEN_STRATEGY_RETRIES")? {
            settings.generator.strategy_retries = retries;
        }
        settings.generator.max_attempts = parse_var(&lookup, "DOMAIN_GEN_MAX_ATTEMPTS")?;
        if let Some(rounds) = parse_var(&lookup, "DOMAIN_GEN_MAX_ROUNDS")? {
            settings.search.max_rounds = rounds;
        }
        settings.store_path = lookup("DOMAIN_GEN_STORE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(settings)
    }

    /// Store file path, falling back to `output/saved_domains.json`
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("output/saved_domains.json"))
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| crate::config_error!("{}='{}': {}", key, raw, e)),
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<Option<bool>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_lowercase()) {
        None => Ok(None),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(crate::config_error!("{}='{}': expected true or false", key, v)),
        },
    }
}

//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use ihm_client::IhmConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub ihm: IhmConfig,
    pub reject_unknown_payer: bool,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| anyhow::anyhow!("{key} environment variable is required"))
        };

        let port = lookup("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()?;

        let mut ihm = IhmConfig::new(
            required("IHM_HOST")?,
            required("IHM_PROJECT_SLUG")?,
            required("IHM_PROJECT_PASSWORD")?,
        );
        if let Some(secs) = lookup("IHM_TIMEOUT_SECS") {
            ihm.timeout = Duration::from_secs(secs.parse()?);
        }
        if let Some(attempts) = lookup("IHM_MAX_ATTEMPTS") {
            ihm.max_attempts = attempts.parse()?;
        }
        if let Some(ms) = lookup("IHM_RETRY_DELAY_MS") {
            ihm.retry_delay = Duration::from_millis(ms.parse()?);
        }

        let reject_unknown_payer = match lookup("RELAY_REJECT_UNKNOWN_PAYER") {
            Some(v) => parse_bool(&v).ok_or_else(|| {
                anyhow::anyhow!("RELAY_REJECT_UNKNOWN_PAYER must be true or false, got '{v}'")
            })?,
            None => false,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be pretty or json, got '{other}'"),
        };

        Ok(Self {
            port,
            ihm,
            reject_unknown_payer,
            log_format,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

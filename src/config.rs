use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const TOKEN_ENV: &str = "TOKEN";
pub const STATS_API_URL_ENV: &str = "STATS_API_URL";
pub const TELEGRAM_API_BASE_ENV: &str = "TELEGRAM_API_BASE";
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";
pub const HTTP_TIMEOUT_ENV: &str = "HTTP_TIMEOUT_SECS";

pub const DEFAULT_STATS_API_URL: &str = "http://localhost:8080/cryptostats";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Settings read once at startup and handed to the clients
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub stats_api_url: String,
    pub telegram_api_base: String,
    pub bind_addr: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset or empty optional keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get(TOKEN_ENV).ok_or(ConfigError::MissingToken)?;

        let http_timeout = match get(HTTP_TIMEOUT_ENV) {
            Some(raw) => {
                // zero would fail every outbound call immediately
                let secs = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        key: HTTP_TIMEOUT_ENV,
                        value: raw.clone(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            bot_token,
            stats_api_url: get(STATS_API_URL_ENV)
                .unwrap_or_else(|| DEFAULT_STATS_API_URL.to_string()),
            telegram_api_base: get(TELEGRAM_API_BASE_ENV)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            bind_addr: get(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            http_timeout,
        })
    }

    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.telegram_api_base, self.bot_token)
    }
}

// Keep the token out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("stats_api_url", &self.stats_api_url)
            .field("telegram_api_base", &self.telegram_api_base)
            .field("bind_addr", &self.bind_addr)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

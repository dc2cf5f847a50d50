//! Configuration module for environment variable parsing.
//!
//! All settings are read once at startup. Missing or unparseable values fall
//! back to defaults; an unset webhook URL simply disables forwarding.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use url::Url;

/// Default port the API listens on.
pub const DEFAULT_PORT: u16 = 8001;

/// Default timeout for the partner webhook POST, in milliseconds.
pub const DEFAULT_WEBHOOK_TIMEOUT_MS: u64 = 10_000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Destination for accepted business inquiries (`None` disables forwarding)
    pub partner_webhook_url: Option<String>,

    /// HTTP timeout for the partner webhook in milliseconds
    pub webhook_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            partner_webhook_url: None,
            webhook_timeout_ms: DEFAULT_WEBHOOK_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let partner_webhook_url = parse_optional("PARTNER_WEBHOOK_URL");

        if let Some(raw) = &partner_webhook_url {
            if let Err(e) = Url::parse(raw) {
                warn!(
                    env_var = "PARTNER_WEBHOOK_URL",
                    error = %e,
                    "Webhook URL does not parse, deliveries will fail"
                );
            }
        }

        Config {
            port: parse_number("PORT", DEFAULT_PORT),

            partner_webhook_url,

            webhook_timeout_ms: parse_number(
                "PARTNER_WEBHOOK_TIMEOUT_MS",
                DEFAULT_WEBHOOK_TIMEOUT_MS,
            ),
        }
    }

    /// Webhook timeout as a `Duration`.
    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_millis(self.webhook_timeout_ms)
    }
}

/// Parse a positive number, falling back to `default` when unset, malformed,
/// or zero.
fn parse_number<T>(name: &str, default: T) -> T
where
    T: FromStr + PartialEq + Default,
{
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => value,
        _ => {
            warn!(env_var = name, value = %raw, "Invalid number, using default");
            default
        }
    }
}

/// Read an optional string, treating blank values as unset.
fn parse_optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|s| !s.is_empty())
}

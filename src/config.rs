//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

/// Client configuration loaded from environment variables.
///
/// Every field has a default matching the production file server setup, so
/// an empty environment is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the BUFU file server.
    #[serde(default = "default_bufu_url")]
    pub bufu_url: String,

    /// Run number sent by the popfile and restart clients.
    #[serde(default = "default_runnumber")]
    pub runnumber: String,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_bufu_url() -> String {
    "http://htcp40:8080".to_string()
}

fn default_runnumber() -> String {
    "1000030354".to_string()
}

fn default_http_timeout_ms() -> u64 {
    30_000
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.bufu_url)
            .map_err(|e| format!("BUFU_URL is not a valid URL: {}", e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "BUFU_URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.runnumber.is_empty() || !self.runnumber.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("RUNNUMBER must be numeric, got '{}'", self.runnumber));
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed, for path concatenation.
    pub fn base_url(&self) -> &str {
        self.bufu_url.trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bufu_url: default_bufu_url(),
            runnumber: default_runnumber(),
            http_timeout_ms: default_http_timeout_ms(),
            rust_log: default_log_level(),
        }
    }
}

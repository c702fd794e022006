//! Configuration management for the MCP server.
//!
//! Configuration is resolved once at startup from an explicit command-line
//! value, environment variables, or defaults, and is immutable afterwards.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Firecrawl backend configuration.
    pub firecrawl: FirecrawlConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the Firecrawl backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirecrawlConfig {
    /// Base URL of the Firecrawl instance, without a trailing slash.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl FirecrawlConfig {
    /// Base URL used when neither the flag nor the environment provides one.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3002";

    /// Resolve the base URL.
    ///
    /// Priority: explicit value, then `FIRECRAWL_URL`, then
    /// `FIRECRAWL_BASE_URL`, then the default. Empty values are treated as
    /// unset. Trailing slashes are stripped.
    pub fn resolve(explicit: Option<String>) -> Self {
        let raw = explicit
            .filter(|url| !url.is_empty())
            .or_else(|| std::env::var("FIRECRAWL_URL").ok().filter(|url| !url.is_empty()))
            .or_else(|| {
                std::env::var("FIRECRAWL_BASE_URL")
                    .ok()
                    .filter(|url| !url.is_empty())
            })
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        Self {
            base_url: raw.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "firecrawl-local-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            firecrawl: FirecrawlConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the environment.
    ///
    /// `base_url` is the explicit value from the command line, if any; it
    /// takes priority over the `FIRECRAWL_URL` and `FIRECRAWL_BASE_URL`
    /// environment variables.
    pub fn from_env(base_url: Option<String>) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.firecrawl = FirecrawlConfig::resolve(base_url);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_firecrawl_env() {
        unsafe {
            std::env::remove_var("FIRECRAWL_URL");
            std::env::remove_var("FIRECRAWL_BASE_URL");
        }
    }

    #[test]
    fn test_default_base_url() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_firecrawl_env();
        let config = FirecrawlConfig::resolve(None);
        assert_eq!(config.base_url, "http://localhost:3002");
    }

    #[test]
    fn test_explicit_url_beats_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FIRECRAWL_URL", "http://b");
        }
        let config = FirecrawlConfig::resolve(Some("http://a".to_string()));
        assert_eq!(config.base_url, "http://a");
        clear_firecrawl_env();
    }

    #[test]
    fn test_firecrawl_url_beats_base_url_var() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FIRECRAWL_URL", "http://b");
            std::env::set_var("FIRECRAWL_BASE_URL", "http://c");
        }
        let config = FirecrawlConfig::resolve(None);
        assert_eq!(config.base_url, "http://b");
        clear_firecrawl_env();
    }

    #[test]
    fn test_base_url_var_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_firecrawl_env();
        unsafe {
            std::env::set_var("FIRECRAWL_BASE_URL", "http://c");
        }
        let config = FirecrawlConfig::resolve(None);
        assert_eq!(config.base_url, "http://c");
        clear_firecrawl_env();
    }

    #[test]
    fn test_empty_env_value_is_skipped() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FIRECRAWL_URL", "");
            std::env::set_var("FIRECRAWL_BASE_URL", "http://c");
        }
        let config = FirecrawlConfig::resolve(None);
        assert_eq!(config.base_url, "http://c");
        clear_firecrawl_env();
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_firecrawl_env();
        let config = FirecrawlConfig::resolve(Some("http://a:3002/".to_string()));
        assert_eq!(config.base_url, "http://a:3002");

        let config = FirecrawlConfig::resolve(Some("http://a:3002//".to_string()));
        assert_eq!(config.base_url, "http://a:3002");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "firecrawl-local-mcp");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.firecrawl.base_url, "http://localhost:3002");
    }
}

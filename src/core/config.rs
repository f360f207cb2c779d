//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream endpoint configuration for webhook-backed tools.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream endpoints called by tools.
///
/// Each webhook-backed tool performs exactly one outbound HTTP call; the
/// target URLs are collected here so they can be overridden per deployment
/// (and pointed at a mock server in tests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Webhook returning the monthly financial rows as a JSON array.
    pub financial_webhook_url: String,

    /// Webhook returning the bills report as `{"data": "..."}`.
    pub bills_webhook_url: String,

    /// Base URL of the account management REST API.
    pub account_api_base: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            financial_webhook_url:
                "https://n8n.tuongeechat.com/webhook/5f7df1a1-054c-42d3-8f84-89045ae34dba"
                    .to_string(),
            bills_webhook_url:
                "https://n8n.tuongeechat.com/webhook/73ab8574-6a42-49d4-ae71-c65138680699"
                    .to_string(),
            account_api_base: "https://expatelitesingles.com".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "webhook-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_FINANCIAL_WEBHOOK_URL") {
            info!("Financial webhook URL overridden from environment");
            config.upstream.financial_webhook_url = url;
        }

        if let Ok(url) = std::env::var("MCP_BILLS_WEBHOOK_URL") {
            info!("Bills webhook URL overridden from environment");
            config.upstream.bills_webhook_url = url;
        }

        if let Ok(base) = std::env::var("MCP_ACCOUNT_API_BASE") {
            info!("Account API base overridden from environment");
            config.upstream.account_api_base = base;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_upstream_defaults() {
        let config = Config::default();
        assert!(
            config
                .upstream
                .financial_webhook_url
                .starts_with("https://n8n.tuongeechat.com/webhook/")
        );
        assert!(
            config
                .upstream
                .bills_webhook_url
                .starts_with("https://n8n.tuongeechat.com/webhook/")
        );
        assert_eq!(
            config.upstream.account_api_base,
            "https://expatelitesingles.com"
        );
    }

    #[test]
    fn test_upstream_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ACCOUNT_API_BASE", "http://localhost:9999");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.account_api_base, "http://localhost:9999");
        unsafe {
            std::env::remove_var("MCP_ACCOUNT_API_BASE");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "test-server");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "test-server");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}

//! Webhook configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WEBHOOK_HOST` - Bind address (default: 127.0.0.1)
//! - `WEBHOOK_PORT` - Listen port (default: 3000)
//! - `WEBHOOK_ENV` - Deployment mode reported by the health endpoint
//!   (default: development)
//! - `clint` / `PRINTFUL_API_KEY` - Printful API credential, checked in
//!   that order
//! - `PRINTFUL_API_BASE` - Printful API base URL (default:
//!   <https://api.printful.com>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//!
//! The Printful credential is deliberately not required at startup: the
//! service must keep answering health checks without it, and the order
//! handler reports the gap per request instead.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Environment variables checked for the Printful credential, in order.
/// First present value wins. `clint` predates the standard name and is
/// kept for deployments that still set it.
const PRINTFUL_API_KEY_VARS: &[&str] = &["clint", "PRINTFUL_API_KEY"];

/// Default Printful API base URL.
pub const DEFAULT_PRINTFUL_API_BASE: &str = "https://api.printful.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Webhook application configuration.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Deployment mode reported by the health endpoint
    pub environment: String,
    /// Printful API configuration
    pub printful: PrintfulConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Printful API configuration.
///
/// Implements `Debug` manually to redact the credential.
#[derive(Clone)]
pub struct PrintfulConfig {
    /// Printful API base URL
    pub api_base: String,
    /// API credential. `None` when neither credential variable is set;
    /// the order handler turns that into a per-request error.
    pub api_key: Option<SecretString>,
}

impl std::fmt::Debug for PrintfulConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintfulConfig")
            .field("api_base", &self.api_base)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl WebhookConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("WEBHOOK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("WEBHOOK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("WEBHOOK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("WEBHOOK_PORT".to_string(), e.to_string()))?;
        let environment = get_env_or_default("WEBHOOK_ENV", "development");
        let printful = PrintfulConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            environment,
            printful,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl PrintfulConfig {
    fn from_env() -> Self {
        Self {
            api_base: get_env_or_default("PRINTFUL_API_BASE", DEFAULT_PRINTFUL_API_BASE),
            api_key: first_present(PRINTFUL_API_KEY_VARS).map(SecretString::from),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Ordered lookup over configuration keys; first present value wins.
fn first_present(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| std::env::var(key).ok())
}

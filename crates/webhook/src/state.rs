//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebhookConfig;
use crate::services::printful::{PrintfulClient, PrintfulError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the Printful client. Both are read-only after startup;
/// invocations share no mutable state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebhookConfig,
    printful: PrintfulClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Printful HTTP client fails to build.
    pub fn new(config: WebhookConfig) -> Result<Self, PrintfulError> {
        let printful = PrintfulClient::new(&config.printful)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, printful }),
        })
    }

    /// Get a reference to the webhook configuration.
    #[must_use]
    pub fn config(&self) -> &WebhookConfig {
        &self.inner.config
    }

    /// Get a reference to the Printful API client.
    #[must_use]
    pub fn printful(&self) -> &PrintfulClient {
        &self.inner.printful
    }
}

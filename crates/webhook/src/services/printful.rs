//! Printful API client for order creation.
//!
//! Wraps the single outbound call the webhook makes: `POST /orders` with a
//! bearer credential. One attempt per order; failures are final and are
//! relayed to the caller, never retried.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::config::PrintfulConfig;

/// Client identification sent with every request.
const CLIENT_USER_AGENT: &str = "Dystynkt.com/1.0";

/// Upper bound on the outbound call. The provider contract has no timeout;
/// this caps how long a hung call can pin a request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when interacting with the Printful API.
#[derive(Debug, Error)]
pub enum PrintfulError {
    /// No credential was found in the environment. The call is never
    /// attempted in this case.
    #[error("Printful API key not configured")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status}")]
    Api {
        status: u16,
        /// Raw response body, relayed to the webhook caller.
        body: serde_json::Value,
    },

    /// Failed to parse the response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Printful API client.
#[derive(Clone)]
pub struct PrintfulClient {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<SecretString>,
}

impl PrintfulClient {
    /// Create a new Printful API client.
    ///
    /// A missing credential is not an error here; it surfaces as
    /// [`PrintfulError::MissingApiKey`] when an order is submitted, so the
    /// service can still start and answer health checks.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &PrintfulConfig) -> Result<Self, PrintfulError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Submit an order to Printful.
    ///
    /// # Errors
    ///
    /// - [`PrintfulError::MissingApiKey`] if no credential is configured;
    ///   no network call is made.
    /// - [`PrintfulError::Api`] with the raw body if Printful answers with
    ///   a non-success status.
    /// - [`PrintfulError::Http`] / [`PrintfulError::Parse`] for transport
    ///   and malformed-response failures.
    pub async fn create_order(
        &self,
        order: &dystynkt_core::FulfillmentOrder,
    ) -> Result<CreatedOrder, PrintfulError> {
        let api_key = self.api_key.as_ref().ok_or(PrintfulError::MissingApiKey)?;
        let url = format!("{}/orders", self.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(order)
            .send()
            .await?;
        let status = response.status();

        // The body is parsed before the status branch: Printful sends JSON
        // for both outcomes, and an unparseable body is a Parse error even
        // on a non-success status.
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| PrintfulError::Parse(e.to_string()))?;

        if !status.is_success() {
            return Err(PrintfulError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CreateOrderResponse =
            serde_json::from_value(body).map_err(|e| PrintfulError::Parse(e.to_string()))?;
        Ok(parsed.result)
    }
}

/// Wrapper for Printful's response envelope.
#[derive(Debug, Deserialize)]
struct CreateOrderResponse {
    result: CreatedOrder,
}

/// The order record Printful created.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedOrder {
    /// Printful's assigned order identifier.
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message() {
        // The storefront matches on this exact text in its error display.
        assert_eq!(
            PrintfulError::MissingApiKey.to_string(),
            "Printful API key not configured"
        );
    }

    #[test]
    fn test_client_strips_trailing_slash_from_base() {
        let client = PrintfulClient::new(&PrintfulConfig {
            api_base: "https://api.printful.com/".to_string(),
            api_key: None,
        })
        .expect("client builds");
        assert_eq!(client.api_base, "https://api.printful.com");
    }

    #[test]
    fn test_create_order_response_envelope() {
        let parsed: CreateOrderResponse =
            serde_json::from_value(serde_json::json!({"code": 200, "result": {"id": 12345}}))
                .expect("envelope parses");
        assert_eq!(parsed.result.id, 12345);
    }
}

//! Webhook gateway port
//!
//! Defines the interface for delivering a multipart payload to the
//! remote automation webhook.

use async_trait::async_trait;
use stylegen_domain::{FormKind, MultipartPayload};
use thiserror::Error;

/// Errors that can occur before an HTTP status is available
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request never completed (DNS, refused, reset)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("No webhook configured for {0} submissions")]
    NotConfigured(FormKind),

    #[error("Invalid webhook endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Raw HTTP reply: any status, body read as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Gateway to the automation webhook
///
/// Implementations (adapters) live in the infrastructure layer. A non-2xx
/// status is a successful delivery from the gateway's point of view; the
/// caller decides what it means. Dropping the returned future aborts the
/// request.
#[async_trait]
pub trait WebhookGateway: Send + Sync {
    /// POST `payload` as multipart form data to the webhook for `kind`
    async fn post(
        &self,
        kind: FormKind,
        payload: MultipartPayload,
    ) -> Result<WebhookResponse, GatewayError>;
}

//! Reqwest-backed webhook gateway
//!
//! Implements [`WebhookGateway`] by POSTing the payload as
//! `multipart/form-data` to a per-form endpoint.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::multipart::{Form, Part as HttpPart};
use std::collections::HashMap;
use stylegen_application::{GatewayError, WebhookGateway, WebhookResponse};
use stylegen_domain::{FormKind, MultipartPayload, PartBody};
use tracing::{debug, info};

use crate::config::FileWebhooksConfig;

const USER_AGENT: &str = concat!("stylegen/", env!("CARGO_PKG_VERSION"));

/// Webhook gateway using a shared `reqwest::Client`
pub struct ReqwestWebhookGateway {
    client: reqwest::Client,
    endpoints: HashMap<FormKind, Url>,
}

impl ReqwestWebhookGateway {
    pub fn new() -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client))
    }

    /// Use a preconfigured client (proxies, TLS, etc.)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoints: HashMap::new(),
        }
    }

    /// Register the webhook URL for one form kind
    pub fn with_endpoint(mut self, kind: FormKind, url: &str) -> Result<Self, GatewayError> {
        let parsed = Url::parse(url)
            .map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidEndpoint(format!(
                "{}: unsupported scheme '{}'",
                url,
                parsed.scheme()
            )));
        }
        self.endpoints.insert(kind, parsed);
        Ok(self)
    }

    /// Register every endpoint present in the config
    pub fn with_config(mut self, config: &FileWebhooksConfig) -> Result<Self, GatewayError> {
        for kind in [FormKind::StyleVariation, FormKind::AdGraphics] {
            if let Some(url) = config.url_for(kind) {
                self = self.with_endpoint(kind, url)?;
            }
        }
        Ok(self)
    }

    pub fn endpoint(&self, kind: FormKind) -> Option<&Url> {
        self.endpoints.get(&kind)
    }
}

/// Convert the domain payload into a reqwest multipart form
fn build_form(payload: MultipartPayload) -> Result<Form, GatewayError> {
    let mut form = Form::new();
    for part in payload.into_parts() {
        let name = part.name();
        form = match part.body {
            PartBody::Text(text) => form.text(name, text),
            PartBody::File(file) => {
                let http_part = HttpPart::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime_type)
                    .map_err(|e| {
                        GatewayError::RequestFailed(format!("Invalid MIME type: {}", e))
                    })?;
                form.part(name, http_part)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl WebhookGateway for ReqwestWebhookGateway {
    async fn post(
        &self,
        kind: FormKind,
        payload: MultipartPayload,
    ) -> Result<WebhookResponse, GatewayError> {
        let url = self
            .endpoints
            .get(&kind)
            .ok_or(GatewayError::NotConfigured(kind))?
            .clone();

        let form = build_form(payload)?;
        debug!("POST {} (multipart)", url);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_request() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to read response body: {}", e)))?;

        info!("Webhook answered HTTP {} ({} bytes)", status, body.len());
        Ok(WebhookResponse::new(status, body))
    }
}

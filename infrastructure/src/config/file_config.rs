//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use stylegen_application::{DEFAULT_TIMEOUT_SECONDS_PER_VARIATION, SubmissionPolicy};
use stylegen_domain::FormKind;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("webhooks.{key} is not a valid http(s) URL: {url}")]
    InvalidWebhookUrl { key: &'static str, url: String },
}

/// Raw webhook endpoints from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhooksConfig {
    /// Endpoint receiving style variation submissions
    pub style_variation_url: Option<String>,
    /// Endpoint receiving ad graphics submissions
    pub ad_graphics_url: Option<String>,
}

impl FileWebhooksConfig {
    pub fn url_for(&self, kind: FormKind) -> Option<&str> {
        match kind {
            FormKind::StyleVariation => self.style_variation_url.as_deref(),
            FormKind::AdGraphics => self.ad_graphics_url.as_deref(),
        }
    }

    pub fn set_url(&mut self, kind: FormKind, url: impl Into<String>) {
        let url = Some(url.into());
        match kind {
            FormKind::StyleVariation => self.style_variation_url = url,
            FormKind::AdGraphics => self.ad_graphics_url = url,
        }
    }
}

/// Raw submission behavior from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubmissionConfig {
    /// Client-side timeout per requested variation; 0 disables it
    pub timeout_seconds_per_variation: u64,
}

impl Default for FileSubmissionConfig {
    fn default() -> Self {
        Self {
            timeout_seconds_per_variation: DEFAULT_TIMEOUT_SECONDS_PER_VARIATION,
        }
    }
}

impl FileSubmissionConfig {
    pub fn to_policy(&self) -> SubmissionPolicy {
        SubmissionPolicy::from_seconds_per_variation(Some(self.timeout_seconds_per_variation))
    }
}

/// Output format for submission results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub webhooks: FileWebhooksConfig,
    pub submission: FileSubmissionConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let urls = [
            ("style_variation_url", &self.webhooks.style_variation_url),
            ("ad_graphics_url", &self.webhooks.ad_graphics_url),
        ];
        for (key, url) in urls {
            if let Some(url) = url
                && !is_http_url(url)
            {
                return Err(ConfigValidationError::InvalidWebhookUrl {
                    key,
                    url: url.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_http_url(raw: &str) -> bool {
    reqwest::Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

//! Infrastructure layer for stylegen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod webhook;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileSubmissionConfig, FileWebhooksConfig,
};
pub use webhook::{ImageLoadError, ReqwestWebhookGateway, load_image_file};

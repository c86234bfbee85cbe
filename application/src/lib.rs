//! Application layer for stylegen
//!
//! This crate contains the submission use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_TIMEOUT_SECONDS_PER_VARIATION, SubmissionPolicy};
pub use ports::{
    submission_notifier::{NoNotifier, SubmissionNotifier},
    webhook_gateway::{GatewayError, WebhookGateway, WebhookResponse},
};
pub use use_cases::submit_form::{SubmitError, SubmitFormUseCase, SubmitOutcome};

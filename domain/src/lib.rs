//! Domain layer for stylegen
//!
//! This crate contains the form state, validation rules and webhook
//! response handling. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Forms
//!
//! A form is plain field state implementing [`WebhookForm`]:
//!
//! - **StyleVariationForm**: restyle a source image (file and/or URL)
//! - **AdGraphicsForm**: generate ad creatives from copy and an optional photo
//!
//! ## Submission
//!
//! - **MultipartPayload**: the body sent to the webhook
//! - **SubmissionResult**: preview/download links recovered from whatever the
//!   webhook answered
//! - **RequestLifecycle**: Idle → Submitting → Succeeded / StillProcessing / Failed

pub mod core;
pub mod form;
pub mod submission;

// Re-export commonly used types
pub use core::error::DomainError;
pub use form::{
    AdGraphicsForm, FieldValue, FormField, FormKind, ImageFile, ImageSource, Quality, Resolution,
    StyleVariationForm, ValidationErrors, WebhookForm,
};
pub use submission::{
    FailureCategory, MultipartPayload, Part, PartBody, RequestLifecycle, SubmissionFailure,
    SubmissionResult, WebhookReply,
};

//! Submission model: outbound payload, response interpretation, lifecycle.

pub mod lifecycle;
pub mod payload;
pub mod response;

pub use lifecycle::{FailureCategory, RequestLifecycle, SubmissionFailure};
pub use payload::{MultipartPayload, Part, PartBody};
pub use response::{SubmissionResult, WebhookReply};

//! Application-level configuration.
//!
//! - [`SubmissionPolicy`]: client-side timeout scaling for webhook submissions

pub mod submission_policy;

pub use submission_policy::{DEFAULT_TIMEOUT_SECONDS_PER_VARIATION, SubmissionPolicy};

//! Submission notification port
//!
//! Defines the callbacks a front end receives while a form is submitted.

use std::time::Duration;
use stylegen_domain::{SubmissionFailure, SubmissionResult, ValidationErrors};

/// Callback for lifecycle changes during a submission
///
/// Implementations live in the presentation layer and decide how to show
/// them (spinner, toast, plain lines).
pub trait SubmissionNotifier: Send + Sync {
    /// Submit was refused locally; no request was made
    fn on_validation_failed(&self, errors: &ValidationErrors);

    /// The request is about to be sent
    fn on_submit_start(&self, variations: i64, timeout: Option<Duration>);

    fn on_succeeded(&self, result: &SubmissionResult);

    /// The client-side timeout fired; results will arrive by email
    fn on_still_processing(&self) {}

    fn on_failed(&self, failure: &SubmissionFailure);

    fn on_cancelled(&self) {}
}

/// No-op notifier for when nobody is watching
pub struct NoNotifier;

impl SubmissionNotifier for NoNotifier {
    fn on_validation_failed(&self, _errors: &ValidationErrors) {}
    fn on_submit_start(&self, _variations: i64, _timeout: Option<Duration>) {}
    fn on_succeeded(&self, _result: &SubmissionResult) {}
    fn on_failed(&self, _failure: &SubmissionFailure) {}
}

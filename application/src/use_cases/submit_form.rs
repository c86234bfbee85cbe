//! Submit Form use case
//!
//! Owns one form instance and drives it through
//! edit → validate → submit → interpret → reset.

use crate::config::SubmissionPolicy;
use crate::ports::submission_notifier::{NoNotifier, SubmissionNotifier};
use crate::ports::webhook_gateway::{GatewayError, WebhookGateway, WebhookResponse};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use stylegen_domain::{
    DomainError, FieldValue, FormField, FormKind, MultipartPayload, PartBody, RequestLifecycle,
    SubmissionFailure, SubmissionResult, ValidationErrors, WebhookForm,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors returned by the controller's command handlers
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Please fix the errors: {0}")]
    Validation(ValidationErrors),

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Form is locked until it is reset")]
    FormLocked,

    #[error("Submission cancelled")]
    Cancelled,

    #[error("{0}")]
    Failed(SubmissionFailure),

    #[error(transparent)]
    InvalidField(#[from] DomainError),
}

impl SubmitError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SubmitError::Cancelled)
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Non-error end of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(SubmissionResult),
    /// The client-side timeout fired before the webhook answered
    StillProcessing,
}

/// How the single network attempt ended
enum Attempt {
    Replied(Result<WebhookResponse, GatewayError>),
    TimedOut,
    Cancelled,
}

struct FormState<F> {
    form: F,
    errors: ValidationErrors,
    lifecycle: RequestLifecycle,
}

/// Controller for one form instance.
///
/// Safe to share behind `Arc`: at most one submission is in flight at a time
/// and a concurrent `on_submit` is rejected without touching the network.
pub struct SubmitFormUseCase<F: WebhookForm, G: WebhookGateway + 'static> {
    gateway: Arc<G>,
    policy: SubmissionPolicy,
    state: Mutex<FormState<F>>,
    in_flight: AtomicBool,
    cancellation_token: Option<CancellationToken>,
}

impl<F: WebhookForm, G: WebhookGateway + 'static> SubmitFormUseCase<F, G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_form(gateway, F::default())
    }

    /// Start from pre-filled form state
    pub fn with_form(gateway: Arc<G>, form: F) -> Self {
        Self {
            gateway,
            policy: SubmissionPolicy::default(),
            state: Mutex::new(FormState {
                form,
                errors: ValidationErrors::new(),
                lifecycle: RequestLifecycle::Idle,
            }),
            in_flight: AtomicBool::new(false),
            cancellation_token: None,
        }
    }

    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Abort the in-flight request when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    fn lock(&self) -> MutexGuard<'_, FormState<F>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== Queries ====================

    pub fn form(&self) -> F {
        self.lock().form.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.lock().errors.clone()
    }

    pub fn lifecycle(&self) -> RequestLifecycle {
        self.lock().lifecycle.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    // ==================== Commands ====================

    /// Write one field.
    ///
    /// A validation message previously recorded for the field is dropped
    /// straight away; the new value is not checked until the next submit.
    pub fn on_field_change(&self, field: FormField, value: FieldValue) -> Result<(), SubmitError> {
        let mut state = self.lock();
        if matches!(
            state.lifecycle,
            RequestLifecycle::Submitting | RequestLifecycle::Succeeded { .. }
        ) {
            return Err(SubmitError::FormLocked);
        }

        state.form.apply(field, value)?;
        state.errors.clear_field(field);
        // Either image source satisfies the image requirement
        if field == FormField::ImageUrl {
            state.errors.clear_field(FormField::Image);
        }
        Ok(())
    }

    /// Submit with no progress callbacks
    pub async fn on_submit(&self) -> Result<SubmitOutcome, SubmitError> {
        self.on_submit_with_notifier(&NoNotifier).await
    }

    /// Validate, send, and interpret the reply.
    ///
    /// Exactly one request is made per call that passes validation. Nothing
    /// is retried.
    pub async fn on_submit_with_notifier(
        &self,
        notifier: &dyn SubmissionNotifier,
    ) -> Result<SubmitOutcome, SubmitError> {
        let mut guard = InFlightGuard::acquire(self)?;

        let (kind, variations, payload) = {
            let mut state = self.lock();
            if state.lifecycle.result().is_some() {
                return Err(SubmitError::FormLocked);
            }

            let errors = state.form.validate();
            if !errors.is_empty() {
                debug!("Validation failed: {}", errors);
                state.errors = errors.clone();
                drop(state);
                notifier.on_validation_failed(&errors);
                return Err(SubmitError::Validation(errors));
            }

            state.errors = ValidationErrors::new();
            state.lifecycle = RequestLifecycle::Submitting;
            (
                state.form.kind(),
                state.form.variation_count(),
                state.form.to_payload(),
            )
        };

        let timeout = self.policy.timeout_for(variations);
        info!(
            "Submitting {} form ({} variations, timeout {:?})",
            kind, variations, timeout
        );
        log_payload(&payload);
        notifier.on_submit_start(variations, timeout);

        let attempt = self.send(kind, payload, timeout).await;

        let (lifecycle, outcome) = match attempt {
            Attempt::Replied(Ok(response)) if response.is_success() => {
                debug!("Webhook response text: {}", response.body);
                let result = SubmissionResult::from_body(&response.body);
                info!(
                    "Submission succeeded (preview: {:?}, download: {:?})",
                    result.preview_url, result.download_url
                );
                notifier.on_succeeded(&result);
                (
                    RequestLifecycle::Succeeded {
                        result: result.clone(),
                    },
                    Ok(SubmitOutcome::Succeeded(result)),
                )
            }
            Attempt::Replied(Ok(response)) => {
                warn!("Webhook answered HTTP {}", response.status);
                Self::failed(SubmissionFailure::transport(response.status), notifier)
            }
            Attempt::Replied(Err(GatewayError::ConnectionError(e))) => {
                warn!("Webhook unreachable: {}", e);
                Self::failed(SubmissionFailure::connectivity(), notifier)
            }
            Attempt::Replied(Err(e)) => {
                warn!("Submission failed: {}", e);
                Self::failed(SubmissionFailure::generic(e.to_string()), notifier)
            }
            Attempt::TimedOut => {
                info!("Client-side timeout reached; treating submission as still processing");
                notifier.on_still_processing();
                (
                    RequestLifecycle::StillProcessing,
                    Ok(SubmitOutcome::StillProcessing),
                )
            }
            Attempt::Cancelled => {
                info!("Submission cancelled");
                notifier.on_cancelled();
                (RequestLifecycle::Idle, Err(SubmitError::Cancelled))
            }
        };

        self.lock().lifecycle = lifecycle;
        guard.complete();
        outcome
    }

    /// Clear the result and restore the form to its defaults
    pub fn on_reset(&self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        let mut state = self.lock();
        state.form = F::default();
        state.errors = ValidationErrors::new();
        state.lifecycle = RequestLifecycle::Idle;
        debug!("Form reset");
        Ok(())
    }

    // ==================== Internals ====================

    async fn send(
        &self,
        kind: FormKind,
        payload: MultipartPayload,
        timeout: Option<Duration>,
    ) -> Attempt {
        let request = self.gateway.post(kind, payload);

        let bounded = async {
            match timeout {
                Some(limit) => match tokio::time::timeout(limit, request).await {
                    Ok(reply) => Attempt::Replied(reply),
                    Err(_) => Attempt::TimedOut,
                },
                None => Attempt::Replied(request.await),
            }
        };

        match &self.cancellation_token {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Attempt::Cancelled,
                attempt = bounded => attempt,
            },
            None => bounded.await,
        }
    }

    fn failed(
        failure: SubmissionFailure,
        notifier: &dyn SubmissionNotifier,
    ) -> (RequestLifecycle, Result<SubmitOutcome, SubmitError>) {
        notifier.on_failed(&failure);
        (
            RequestLifecycle::Failed {
                failure: failure.clone(),
            },
            Err(SubmitError::Failed(failure)),
        )
    }
}

fn log_payload(payload: &MultipartPayload) {
    let fields: Vec<String> = payload
        .parts()
        .iter()
        .map(|part| match &part.body {
            PartBody::Text(_) => part.name().to_string(),
            PartBody::File(file) => format!("{} ({}, {} bytes)", part.name(), file.mime_type, file.len()),
        })
        .collect();
    debug!(
        "Submitting to webhook: email={:?} quality={:?} fields=[{}]",
        payload.text_value(FormField::Email),
        payload.text_value(FormField::Quality),
        fields.join(", ")
    );
}

/// Single-flight guard.
///
/// Released on drop. If the submission future is dropped before it
/// finishes, the lifecycle falls back from `Submitting` to `Idle`.
struct InFlightGuard<'a, F: WebhookForm, G: WebhookGateway + 'static> {
    owner: &'a SubmitFormUseCase<F, G>,
    completed: bool,
}

impl<'a, F: WebhookForm, G: WebhookGateway + 'static> InFlightGuard<'a, F, G> {
    fn acquire(owner: &'a SubmitFormUseCase<F, G>) -> Result<Self, SubmitError> {
        owner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmitError::AlreadySubmitting)?;
        Ok(Self {
            owner,
            completed: false,
        })
    }

    fn complete(&mut self) {
        self.completed = true;
    }
}

impl<F: WebhookForm, G: WebhookGateway + 'static> Drop for InFlightGuard<'_, F, G> {
    fn drop(&mut self) {
        if !self.completed {
            let mut state = self.owner.lock();
            if state.lifecycle.is_submitting() {
                state.lifecycle = RequestLifecycle::Idle;
            }
        }
        self.owner.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use stylegen_domain::{AdGraphicsForm, FailureCategory, ImageFile, Quality, StyleVariationForm};

    // ==================== Test Mocks ====================

    enum Reply {
        Status(u16, &'static str),
        Unreachable,
        Hang,
    }

    struct MockGateway {
        reply: Reply,
        delay: Option<Duration>,
        calls: AtomicUsize,
        last_payload: Mutex<Option<MultipartPayload>>,
    }

    impl MockGateway {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                delay: None,
                calls: AtomicUsize::new(0),
                last_payload: Mutex::new(None),
            }
        }

        fn ok(body: &'static str) -> Self {
            Self::new(Reply::Status(200, body))
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WebhookGateway for MockGateway {
        async fn post(
            &self,
            _kind: FormKind,
            payload: MultipartPayload,
        ) -> Result<WebhookResponse, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_payload.lock().unwrap() = Some(payload);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.reply {
                Reply::Status(status, body) => Ok(WebhookResponse::new(*status, *body)),
                Reply::Unreachable => Err(GatewayError::ConnectionError(
                    "connection refused".to_string(),
                )),
                Reply::Hang => std::future::pending().await,
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl SubmissionNotifier for RecordingNotifier {
        fn on_validation_failed(&self, errors: &ValidationErrors) {
            self.events
                .lock()
                .unwrap()
                .push(format!("invalid:{}", errors.len()));
        }
        fn on_submit_start(&self, variations: i64, timeout: Option<Duration>) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}:{:?}", variations, timeout.map(|t| t.as_secs())));
        }
        fn on_succeeded(&self, _result: &SubmissionResult) {
            self.events.lock().unwrap().push("succeeded".to_string());
        }
        fn on_still_processing(&self) {
            self.events.lock().unwrap().push("still_processing".to_string());
        }
        fn on_failed(&self, failure: &SubmissionFailure) {
            self.events
                .lock()
                .unwrap()
                .push(format!("failed:{}", failure.category));
        }
    }

    fn valid_style_form() -> StyleVariationForm {
        let mut form = StyleVariationForm::default();
        form.email = "jane@studio.io".to_string();
        form.quality = Some(Quality::High);
        form.image.url = Some("https://example.com/cat.png".to_string());
        form
    }

    fn controller(
        gateway: MockGateway,
    ) -> (
        Arc<MockGateway>,
        SubmitFormUseCase<StyleVariationForm, MockGateway>,
    ) {
        let gateway = Arc::new(gateway);
        let use_case = SubmitFormUseCase::with_form(Arc::clone(&gateway), valid_style_form());
        (gateway, use_case)
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_empty_email_fails_without_network_call() {
        let (gateway, use_case) = controller(MockGateway::ok(""));
        use_case
            .on_field_change(FormField::Email, FieldValue::text(""))
            .unwrap();

        let notifier = RecordingNotifier::default();
        let err = use_case
            .on_submit_with_notifier(&notifier)
            .await
            .unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(gateway.calls(), 0);
        assert_eq!(use_case.lifecycle(), RequestLifecycle::Idle);
        assert_eq!(use_case.errors(), *errors);
        assert_eq!(notifier.events(), vec!["invalid:1"]);
    }

    #[tokio::test]
    async fn test_missing_image_is_flagged() {
        let (gateway, use_case) = controller(MockGateway::ok(""));
        use_case
            .on_field_change(FormField::ImageUrl, FieldValue::Clear)
            .unwrap();

        let err = use_case.on_submit().await.unwrap_err();
        assert!(err.validation_errors().unwrap().contains(FormField::Image));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_field_change_clears_only_that_error() {
        let gateway = Arc::new(MockGateway::ok(""));
        let use_case: SubmitFormUseCase<StyleVariationForm, _> = SubmitFormUseCase::new(gateway);
        assert!(use_case.on_submit().await.is_err());
        assert_eq!(use_case.errors().len(), 3);

        use_case
            .on_field_change(FormField::Email, "not-valid".into())
            .unwrap();
        let errors = use_case.errors();
        assert!(!errors.contains(FormField::Email));
        assert!(errors.contains(FormField::Quality));

        use_case
            .on_field_change(FormField::ImageUrl, "https://example.com/x.png".into())
            .unwrap();
        assert!(!use_case.errors().contains(FormField::Image));
    }

    #[tokio::test]
    async fn test_invalid_field_value_is_rejected() {
        let (_gateway, use_case) = controller(MockGateway::ok(""));
        let err = use_case
            .on_field_change(FormField::Quality, "ultra".into())
            .unwrap_err();
        assert!(matches!(
            err,
            SubmitError::InvalidField(DomainError::InvalidQuality(_))
        ));
        assert_eq!(use_case.form().quality, Some(Quality::High));
    }

    // ==================== Responses ====================

    #[tokio::test]
    async fn test_view_link_array_succeeds() {
        let (gateway, use_case) = controller(MockGateway::ok(
            r#"[{"ViewLink":"https://drive.google.com/file/d/ABC123/view"}]"#,
        ));
        let notifier = RecordingNotifier::default();

        let outcome = use_case.on_submit_with_notifier(&notifier).await.unwrap();

        let SubmitOutcome::Succeeded(result) = outcome else {
            panic!("expected success");
        };
        assert_eq!(
            result.preview_url.as_deref(),
            Some("https://drive.google.com/file/d/ABC123/view")
        );
        assert_eq!(result.preview_url, result.download_url);
        assert_eq!(use_case.lifecycle().result(), Some(&result));
        assert_eq!(gateway.calls(), 1);
        assert_eq!(notifier.events(), vec!["start:3:Some(540)", "succeeded"]);
        assert!(!use_case.is_submitting());
    }

    #[tokio::test]
    async fn test_empty_body_is_success_without_links() {
        let (_gateway, use_case) = controller(MockGateway::ok(""));
        let outcome = use_case.on_submit().await.unwrap();
        let SubmitOutcome::Succeeded(result) = outcome else {
            panic!("expected success");
        };
        assert_eq!(result.preview_url, None);
        assert_eq!(result.download_url, None);
        assert!(matches!(
            use_case.lifecycle(),
            RequestLifecycle::Succeeded { .. }
        ));
    }

    #[tokio::test]
    async fn test_non_2xx_is_transport_failure() {
        let (gateway, use_case) = controller(MockGateway::new(Reply::Status(503, "busy")));
        let err = use_case.on_submit().await.unwrap_err();

        let SubmitError::Failed(failure) = err else {
            panic!("expected failure");
        };
        assert_eq!(failure.category, FailureCategory::Transport { status: 503 });
        assert_eq!(use_case.lifecycle().failure(), Some(&failure));
        assert_eq!(gateway.calls(), 1);
        assert!(!use_case.is_submitting());
    }

    #[tokio::test]
    async fn test_unreachable_is_connectivity_failure() {
        let (_gateway, use_case) = controller(MockGateway::new(Reply::Unreachable));
        let err = use_case.on_submit().await.unwrap_err();
        let SubmitError::Failed(failure) = err else {
            panic!("expected failure");
        };
        assert_eq!(failure.category, FailureCategory::Connectivity);
    }

    #[tokio::test]
    async fn test_failed_submission_can_be_resubmitted() {
        let (gateway, use_case) = controller(MockGateway::new(Reply::Status(500, "")));
        assert!(use_case.on_submit().await.is_err());
        use_case
            .on_field_change(FormField::StyleNotes, "retry".into())
            .unwrap();
        assert!(use_case.on_submit().await.is_err());
        assert_eq!(gateway.calls(), 2);
    }

    // ==================== Timeout / cancellation ====================

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_still_processing() {
        let (_gateway, use_case) = controller(MockGateway::new(Reply::Hang));
        let use_case = use_case.with_policy(
            SubmissionPolicy::default().with_timeout_per_variation(Duration::from_secs(1)),
        );
        let notifier = RecordingNotifier::default();

        let outcome = use_case.on_submit_with_notifier(&notifier).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::StillProcessing);
        assert_eq!(use_case.lifecycle(), RequestLifecycle::StillProcessing);
        assert_eq!(
            notifier.events(),
            vec!["start:3:Some(3)", "still_processing"]
        );
        assert!(!use_case.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_scales_with_variation_count() {
        let gateway = MockGateway::ok("").with_delay(Duration::from_secs(5));
        let (_gateway, use_case) = controller(gateway);
        let use_case = use_case.with_policy(
            SubmissionPolicy::default().with_timeout_per_variation(Duration::from_secs(2)),
        );
        // 3 variations × 2s = 6s > 5s delay
        assert!(matches!(
            use_case.on_submit().await,
            Ok(SubmitOutcome::Succeeded(_))
        ));
    }

    #[tokio::test]
    async fn test_cancellation_returns_to_idle() {
        let token = CancellationToken::new();
        let (_gateway, use_case) = controller(MockGateway::new(Reply::Hang));
        let use_case = use_case
            .with_policy(SubmissionPolicy::without_timeout())
            .with_cancellation(token.clone());

        token.cancel();
        let err = use_case.on_submit().await.unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(use_case.lifecycle(), RequestLifecycle::Idle);
        assert!(!use_case.is_submitting());
    }

    // ==================== Single flight ====================

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_is_rejected_while_in_flight() {
        let gateway = MockGateway::ok("").with_delay(Duration::from_secs(10));
        let (gateway, use_case) = controller(gateway);
        let use_case = Arc::new(use_case.with_policy(SubmissionPolicy::without_timeout()));

        let first = {
            let use_case = Arc::clone(&use_case);
            tokio::spawn(async move { use_case.on_submit().await })
        };
        tokio::task::yield_now().await;
        assert!(use_case.is_submitting());
        assert_eq!(use_case.lifecycle(), RequestLifecycle::Submitting);

        let second = use_case.on_submit().await;
        assert!(matches!(second, Err(SubmitError::AlreadySubmitting)));
        assert!(matches!(
            use_case.on_field_change(FormField::StyleNotes, "x".into()),
            Err(SubmitError::FormLocked)
        ));

        assert!(first.await.unwrap().is_ok());
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submit_releases_guard() {
        let gateway = MockGateway::ok("").with_delay(Duration::from_secs(10));
        let (_gateway, use_case) = controller(gateway);
        let use_case = use_case.with_policy(SubmissionPolicy::without_timeout());

        let dropped =
            tokio::time::timeout(Duration::from_secs(1), use_case.on_submit()).await;
        assert!(dropped.is_err());
        assert!(!use_case.is_submitting());
        assert_eq!(use_case.lifecycle(), RequestLifecycle::Idle);
    }

    // ==================== Reset ====================

    #[tokio::test]
    async fn test_success_locks_form_until_reset() {
        let (_gateway, use_case) = controller(MockGateway::ok(
            r#"{"firstImageUrl":"https://x/1.png","downloadUrl":"https://x/all.zip"}"#,
        ));
        use_case
            .on_field_change(FormField::VariationCount, FieldValue::Number(7))
            .unwrap();
        use_case
            .on_field_change(
                FormField::Image,
                ImageFile::new("cat.png", "image/png", vec![1u8; 4]).into(),
            )
            .unwrap();
        assert!(use_case.on_submit().await.is_ok());

        assert!(matches!(
            use_case.on_field_change(FormField::Email, "x@y.z".into()),
            Err(SubmitError::FormLocked)
        ));
        assert!(matches!(
            use_case.on_submit().await,
            Err(SubmitError::FormLocked)
        ));

        use_case.on_reset().unwrap();
        assert_eq!(use_case.lifecycle(), RequestLifecycle::Idle);
        let form = use_case.form();
        assert_eq!(form, StyleVariationForm::default());
        assert_eq!(form.variation_count, 3);
        assert!(form.quality.is_none());
        assert!(form.image.file.is_none() && form.image.url.is_none());
        assert!(use_case.errors().is_empty());
    }

    #[tokio::test]
    async fn test_ad_graphics_payload_reaches_gateway() {
        let gateway = Arc::new(MockGateway::ok(""));
        let use_case: SubmitFormUseCase<AdGraphicsForm, _> =
            SubmitFormUseCase::new(Arc::clone(&gateway));
        for (field, value) in [
            (FormField::Email, "ads@startup.dev"),
            (FormField::Headline, "Ship faster"),
            (FormField::SubHeading, "Release notes on autopilot"),
            (FormField::Pointers, "one click"),
            (FormField::Cta, "Start free"),
            (FormField::ButtonText, "Try it"),
            (FormField::Resolution, "portrait"),
        ] {
            use_case.on_field_change(field, value.into()).unwrap();
        }

        assert!(use_case.on_submit().await.is_ok());
        let payload = gateway.last_payload.lock().unwrap().clone().unwrap();
        assert_eq!(payload.text_value(FormField::Resolution), Some("portrait"));
        assert_eq!(
            payload.text_value(FormField::WantHeadlineVariations),
            Some("false")
        );
    }
}

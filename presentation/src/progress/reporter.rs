//! Progress reporting during webhook submission

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use stylegen_application::SubmissionNotifier;
use stylegen_domain::{SubmissionFailure, SubmissionResult, ValidationErrors};

/// Shows a spinner while the request is in flight and a one-line
/// notification when it ends
pub struct SubmissionReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SubmissionReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
    }
}

impl Default for SubmissionReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionNotifier for SubmissionReporter {
    fn on_validation_failed(&self, errors: &ValidationErrors) {
        eprintln!(
            "{} {} ({} field{})",
            "x".red(),
            "Please fix the errors".red().bold(),
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        );
    }

    fn on_submit_start(&self, variations: i64, timeout: Option<Duration>) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Generating");
        let limit = match timeout {
            Some(t) => format!(", up to {}s", t.as_secs()),
            None => String::new(),
        };
        pb.set_message(format!("{} variation(s){}", variations, limit));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_succeeded(&self, _result: &SubmissionResult) {
        self.finish();
        eprintln!("{} {}", "v".green(), "Success!".green().bold());
    }

    fn on_still_processing(&self) {
        self.finish();
        eprintln!(
            "{} {}",
            "~".yellow(),
            "Still processing, results will arrive by email".yellow()
        );
    }

    fn on_failed(&self, failure: &SubmissionFailure) {
        self.finish();
        eprintln!("{} {}", "x".red(), failure.title.red().bold());
    }

    fn on_cancelled(&self) {
        self.finish();
        eprintln!("{} {}", "x".red(), "Cancelled".red());
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleNotifier;

impl SubmissionNotifier for SimpleNotifier {
    fn on_validation_failed(&self, errors: &ValidationErrors) {
        eprintln!("{} validation failed: {}", "->".cyan(), errors);
    }

    fn on_submit_start(&self, variations: i64, timeout: Option<Duration>) {
        match timeout {
            Some(t) => eprintln!(
                "{} submitting {} variation(s), timeout {}s",
                "->".cyan(),
                variations,
                t.as_secs()
            ),
            None => eprintln!("{} submitting {} variation(s)", "->".cyan(), variations),
        }
    }

    fn on_succeeded(&self, _result: &SubmissionResult) {
        eprintln!("  {} done", "v".green());
    }

    fn on_still_processing(&self) {
        eprintln!("  {} still processing", "~".yellow());
    }

    fn on_failed(&self, failure: &SubmissionFailure) {
        eprintln!("  {} {} ({})", "x".red(), failure.title, failure.category);
    }
}

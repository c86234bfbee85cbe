//! Console output formatter for submission results

use colored::Colorize;
use serde::Serialize;
use stylegen_domain::{FormKind, RequestLifecycle, SubmissionResult, ValidationErrors};

/// Machine-readable summary of one submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport<'a> {
    pub form: FormKind,
    pub email: &'a str,
    #[serde(flatten)]
    pub lifecycle: &'a RequestLifecycle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<&'a ValidationErrors>,
}

/// Formats submission state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the final state of a submission
    pub fn format(kind: FormKind, lifecycle: &RequestLifecycle, email: &str) -> String {
        match lifecycle {
            RequestLifecycle::Succeeded { result } => Self::format_success(kind, result, email),
            RequestLifecycle::StillProcessing => Self::format_still_processing(email),
            RequestLifecycle::Failed { failure } => format!(
                "{} {}\n{}\n",
                "x".red().bold(),
                failure.title.red().bold(),
                failure.message
            ),
            RequestLifecycle::Idle | RequestLifecycle::Submitting => {
                format!("{} {}\n", "-".dimmed(), lifecycle.as_str())
            }
        }
    }

    fn format_success(kind: FormKind, result: &SubmissionResult, email: &str) -> String {
        let mut output = String::new();

        let title = match kind {
            FormKind::StyleVariation => "Your AI Variations Are Ready!",
            FormKind::AdGraphics => "Your Ad Graphics Are On Their Way!",
        };
        output.push_str(&Self::header(title));
        output.push('\n');

        if !email.is_empty() {
            output.push_str(&format!(
                "We've sent the download link to {}\n",
                email.bold()
            ));
        }

        if let Some(preview) = &result.preview_url {
            output.push_str(&format!("\n{} {}\n", "Preview:".cyan().bold(), preview));
        }

        if let Some(download) = &result.download_url {
            output.push_str(&format!("{} {}\n", "Download:".cyan().bold(), download));
        }

        if !result.has_links() {
            let message = result
                .message
                .as_deref()
                .unwrap_or("Request processed successfully");
            output.push_str(&format!("\n{}\n", message));
            output.push_str(&format!(
                "{}\n",
                "Check your email for the results.".dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_still_processing(email: &str) -> String {
        let mut output = format!(
            "{} {}\n",
            "~".yellow().bold(),
            "Still processing".yellow().bold()
        );
        output.push_str(
            "Generation is taking longer than expected. The results will be sent to ",
        );
        if email.is_empty() {
            output.push_str("your email.\n");
        } else {
            output.push_str(&format!("{}.\n", email.bold()));
        }
        output
    }

    /// Format field-level validation errors
    pub fn format_validation(errors: &ValidationErrors) -> String {
        let mut output = format!(
            "{}\n",
            "Please fix the errors. Check all required fields and try again."
                .red()
                .bold()
        );
        for (field, message) in errors.iter() {
            output.push_str(&format!("  {} {}\n", format!("{}:", field).yellow(), message));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(report: &SubmissionReport<'_>) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

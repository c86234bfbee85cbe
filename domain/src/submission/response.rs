//! Webhook response interpretation
//!
//! The webhook has no fixed response contract. Depending on the workflow
//! version it answers with nothing, with plain text, with a JSON object, or
//! with a one-element JSON array. [`SubmissionResult::from_body`] turns any
//! of these into an optional preview/download pair without ever failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cloud-storage share link used for both preview and download
pub const VIEW_LINK_KEY: &str = "ViewLink";

/// Preview keys, in priority order
pub const PREVIEW_KEYS: [&str; 3] = ["firstImageUrl", "previewImage", "imageUrl"];

/// Download keys, in priority order
pub const DOWNLOAD_KEYS: [&str; 2] = ["downloadUrl", "driveLink"];

/// Message used when the webhook answers 2xx with an empty body
pub const EMPTY_BODY_MESSAGE: &str = "Request processed successfully";

/// Raw 2xx response body, classified
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookReply {
    Empty,
    Json(Value),
    /// Body that was not valid JSON, kept verbatim
    Text(String),
}

impl WebhookReply {
    /// Classify a response body. Never fails: non-JSON becomes `Text`.
    pub fn parse(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return WebhookReply::Empty;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => WebhookReply::Json(value),
            Err(_) => WebhookReply::Text(body.to_string()),
        }
    }
}

/// What a successful submission produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub preview_url: Option<String>,
    pub download_url: Option<String>,
    /// Free-form text from the webhook, shown when there are no links
    pub message: Option<String>,
}

impl SubmissionResult {
    pub fn from_body(body: &str) -> Self {
        Self::from_reply(&WebhookReply::parse(body))
    }

    pub fn from_reply(reply: &WebhookReply) -> Self {
        match reply {
            WebhookReply::Empty => Self {
                message: Some(EMPTY_BODY_MESSAGE.to_string()),
                ..Self::default()
            },
            WebhookReply::Text(text) => Self {
                message: Some(text.clone()),
                ..Self::default()
            },
            WebhookReply::Json(value) => Self::from_json(value),
        }
    }

    /// Apply the link fallback chain:
    ///
    /// 1. `[ { "ViewLink": .. }, .. ]`: first array element's view link
    /// 2. `{ "ViewLink": .. }`: the object's own view link
    /// 3. independent preview / download keys
    /// 4. nothing; still a success, with the reply kept as the message
    fn from_json(value: &Value) -> Self {
        let result = Self::from_links(value);
        if result.has_links() || result.message.is_some() {
            return result;
        }
        Self {
            message: Some(opaque_message(value)),
            ..result
        }
    }

    fn from_links(value: &Value) -> Self {
        if let Some(link) = value
            .as_array()
            .and_then(|items| items.first())
            .and_then(Value::as_object)
            .and_then(|first| string_field(first, VIEW_LINK_KEY))
        {
            return Self::view_link(link);
        }

        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let message = string_field(object, "message").map(str::to_string);

        if let Some(link) = string_field(object, VIEW_LINK_KEY) {
            return Self {
                message,
                ..Self::view_link(link)
            };
        }

        Self {
            preview_url: first_string_field(object, &PREVIEW_KEYS),
            download_url: first_string_field(object, &DOWNLOAD_KEYS),
            message,
        }
    }

    fn view_link(link: &str) -> Self {
        Self {
            preview_url: Some(link.to_string()),
            download_url: Some(link.to_string()),
            message: None,
        }
    }

    pub fn has_links(&self) -> bool {
        self.preview_url.is_some() || self.download_url.is_some()
    }
}

/// Display text for a reply of unrecognised shape
fn opaque_message(value: &Value) -> String {
    match value {
        Value::String(text) if text.trim().is_empty() => EMPTY_BODY_MESSAGE.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Non-empty string value of `key`
fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn first_string_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| string_field(object, key))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRIVE_LINK: &str = "https://drive.google.com/file/d/ABC123/view";

    #[test]
    fn test_array_view_link_is_used_for_both() {
        let result =
            SubmissionResult::from_body(r#"[{"ViewLink":"https://drive.google.com/file/d/ABC123/view"}]"#);
        assert_eq!(result.preview_url.as_deref(), Some(DRIVE_LINK));
        assert_eq!(result.download_url.as_deref(), Some(DRIVE_LINK));
    }

    #[test]
    fn test_array_view_link_beats_other_keys() {
        let body = r#"[{"ViewLink":"https://drive.google.com/file/d/ABC123/view","firstImageUrl":"https://x/1.png","downloadUrl":"https://x/all.zip"}]"#;
        let result = SubmissionResult::from_body(body);
        assert_eq!(result.preview_url.as_deref(), Some(DRIVE_LINK));
        assert_eq!(result.download_url.as_deref(), Some(DRIVE_LINK));
    }

    #[test]
    fn test_object_view_link() {
        let result = SubmissionResult::from_body(
            r#"{"ViewLink":"https://drive.google.com/file/d/ABC123/view","downloadUrl":"https://x/all.zip"}"#,
        );
        assert_eq!(result.preview_url.as_deref(), Some(DRIVE_LINK));
        assert_eq!(result.download_url.as_deref(), Some(DRIVE_LINK));
    }

    #[test]
    fn test_independent_preview_and_download_keys() {
        let result = SubmissionResult::from_body(
            r#"{"firstImageUrl":"https://x/1.png","downloadUrl":"https://x/all.zip"}"#,
        );
        assert_eq!(result.preview_url.as_deref(), Some("https://x/1.png"));
        assert_eq!(result.download_url.as_deref(), Some("https://x/all.zip"));
    }

    #[test]
    fn test_fallback_key_priority() {
        let result = SubmissionResult::from_body(
            r#"{"imageUrl":"https://x/c.png","previewImage":"https://x/b.png","driveLink":"https://drive/x"}"#,
        );
        assert_eq!(result.preview_url.as_deref(), Some("https://x/b.png"));
        assert_eq!(result.download_url.as_deref(), Some("https://drive/x"));
    }

    #[test]
    fn test_empty_body_is_placeholder_success() {
        let result = SubmissionResult::from_body("  \n");
        assert!(!result.has_links());
        assert_eq!(result.message.as_deref(), Some(EMPTY_BODY_MESSAGE));
    }

    #[test]
    fn test_plain_text_is_kept_as_message() {
        let result = SubmissionResult::from_body("Workflow was started");
        assert!(!result.has_links());
        assert_eq!(result.message.as_deref(), Some("Workflow was started"));
    }

    #[test]
    fn test_unknown_shape_keeps_reply_as_message() {
        let result = SubmissionResult::from_body(r#"{"status":"queued"}"#);
        assert!(!result.has_links());
        assert_eq!(result.message.as_deref(), Some(r#"{"status":"queued"}"#));

        let result = SubmissionResult::from_body(r#"[{"firstImageUrl":"https://x/1.png"}]"#);
        assert!(!result.has_links());
        assert_eq!(
            result.message.as_deref(),
            Some(r#"[{"firstImageUrl":"https://x/1.png"}]"#)
        );

        let result = SubmissionResult::from_body("[]");
        assert!(!result.has_links());
        assert_eq!(result.message.as_deref(), Some("[]"));
    }

    #[test]
    fn test_json_string_reply_is_unquoted_message() {
        let result = SubmissionResult::from_body(r#""Workflow was started""#);
        assert!(!result.has_links());
        assert_eq!(result.message.as_deref(), Some("Workflow was started"));

        let result = SubmissionResult::from_body(r#""""#);
        assert_eq!(result.message.as_deref(), Some(EMPTY_BODY_MESSAGE));
    }

    #[test]
    fn test_json_scalar_reply_is_message() {
        let result = SubmissionResult::from_body("42");
        assert!(!result.has_links());
        assert_eq!(result.message.as_deref(), Some("42"));
    }

    #[test]
    fn test_links_found_leave_message_unset() {
        let result = SubmissionResult::from_body(r#"{"firstImageUrl":"https://x/1.png"}"#);
        assert_eq!(result.message, None);
    }

    #[test]
    fn test_empty_view_link_falls_through() {
        let result =
            SubmissionResult::from_body(r#"{"ViewLink":"","firstImageUrl":"https://x/1.png"}"#);
        assert_eq!(result.preview_url.as_deref(), Some("https://x/1.png"));
        assert_eq!(result.download_url, None);
    }

    #[test]
    fn test_object_message_is_kept() {
        let result = SubmissionResult::from_body(r#"{"message":"Workflow was started"}"#);
        assert_eq!(result.message.as_deref(), Some("Workflow was started"));
        assert!(!result.has_links());
    }

    #[test]
    fn test_reply_classification() {
        assert_eq!(WebhookReply::parse(""), WebhookReply::Empty);
        assert_eq!(
            WebhookReply::parse("oops {"),
            WebhookReply::Text("oops {".to_string())
        );
        assert!(matches!(WebhookReply::parse("{}"), WebhookReply::Json(_)));
    }
}

//! The contract every webhook-backed form implements

use super::field::{FieldValue, FormField};
use super::validation::ValidationErrors;
use crate::core::error::DomainError;
use crate::submission::payload::MultipartPayload;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which form (and therefore which webhook) a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    StyleVariation,
    AdGraphics,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::StyleVariation => write!(f, "style variation"),
            FormKind::AdGraphics => write!(f, "ad graphics"),
        }
    }
}

/// Form state that can be edited field by field, validated, and serialized
/// into a multipart payload.
///
/// `Default` is the state a form returns to on reset.
pub trait WebhookForm: Default + Clone + Send + Sync + 'static {
    fn kind(&self) -> FormKind;

    /// Write one field. Does not validate the new value.
    fn apply(&mut self, field: FormField, value: FieldValue) -> Result<(), DomainError>;

    /// Full submit-time validation; empty iff the form may be sent
    fn validate(&self) -> ValidationErrors;

    /// Multipart body containing every present field
    fn to_payload(&self) -> MultipartPayload;

    fn variation_count(&self) -> i64;

    fn email(&self) -> &str;
}

pub(crate) fn text_value(field: FormField, value: FieldValue) -> Result<String, DomainError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        FieldValue::Clear => Ok(String::new()),
        _ => Err(DomainError::FieldTypeMismatch {
            field,
            expected: "text",
        }),
    }
}

/// Accepts a number, or text holding a decimal integer
pub(crate) fn count_value(field: FormField, value: FieldValue) -> Result<i64, DomainError> {
    match value {
        FieldValue::Number(n) => Ok(n),
        FieldValue::Text(text) => {
            text.trim()
                .parse::<i64>()
                .map_err(|_| DomainError::FieldTypeMismatch {
                    field,
                    expected: "a number",
                })
        }
        _ => Err(DomainError::FieldTypeMismatch {
            field,
            expected: "a number",
        }),
    }
}

pub(crate) fn flag_value(field: FormField, value: FieldValue) -> Result<bool, DomainError> {
    match value {
        FieldValue::Flag(b) => Ok(b),
        FieldValue::Text(text) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(DomainError::FieldTypeMismatch {
                field,
                expected: "true or false",
            }),
        },
        FieldValue::Clear => Ok(false),
        _ => Err(DomainError::FieldTypeMismatch {
            field,
            expected: "true or false",
        }),
    }
}

/// Text that maps empty input to "unset"
pub(crate) fn optional_text_value(
    field: FormField,
    value: FieldValue,
) -> Result<Option<String>, DomainError> {
    let text = text_value(field, value)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

pub(crate) fn file_value(
    field: FormField,
    value: FieldValue,
) -> Result<Option<super::image::ImageFile>, DomainError> {
    match value {
        FieldValue::File(file) => Ok(Some(file)),
        FieldValue::Clear => Ok(None),
        _ => Err(DomainError::FieldTypeMismatch {
            field,
            expected: "an image file",
        }),
    }
}

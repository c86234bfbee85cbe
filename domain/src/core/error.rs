//! Domain error types

use crate::form::field::FormField;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Field '{0}' is not part of this form")]
    UnknownField(FormField),

    #[error("Field '{field}' expects {expected}")]
    FieldTypeMismatch {
        field: FormField,
        expected: &'static str,
    },

    #[error("Invalid quality: {0} (expected high, medium or low)")]
    InvalidQuality(String),

    #[error("Invalid resolution: {0} (expected square, portrait or landscape)")]
    InvalidResolution(String),
}

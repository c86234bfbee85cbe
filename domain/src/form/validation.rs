//! Submit-time validation results and the shared field checks

use super::field::FormField;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Inclusive bounds for the number of variations a form may request
pub const MIN_VARIATIONS: i64 = 1;
pub const MAX_VARIATIONS: i64 = 10;

/// Loose `text@text.text` shape; deliverability is the webhook's problem
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Field-level validation messages, keyed by field.
///
/// Recomputed wholesale on every submit attempt. Between submits, entries
/// are removed one at a time as the user edits the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the message for one field; returns whether one existed
    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Convert into `Ok(())` when empty
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Record an error when the email is empty or not shaped like an address
pub fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !EMAIL_SHAPE.is_match(email) {
        errors.insert(FormField::Email, "Please enter a valid email");
    }
}

pub fn check_variation_count(errors: &mut ValidationErrors, count: i64) {
    if !(MIN_VARIATIONS..=MAX_VARIATIONS).contains(&count) {
        errors.insert(
            FormField::VariationCount,
            format!(
                "Variation count must be between {} and {}",
                MIN_VARIATIONS, MAX_VARIATIONS
            ),
        );
    }
}

/// Record `message` when `value` is blank after trimming
pub fn require_text(errors: &mut ValidationErrors, field: FormField, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

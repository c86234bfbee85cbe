//! Form field names and the values user input handlers write into them

use super::image::ImageFile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named field of a webhook form.
///
/// The string form of each variant is the multipart part name the webhook
/// expects, so the same name is used for validation error keys and for the
/// outbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Email,
    VariationCount,
    Quality,
    StyleNotes,
    /// Binary image part (and the validation key for "no image at all")
    Image,
    ImageUrl,
    Headline,
    SubHeading,
    Pointers,
    Cta,
    ButtonText,
    PersonDetails,
    OtherRequirements,
    Resolution,
    WantHeadlineVariations,
}

impl FormField {
    pub const ALL: [FormField; 15] = [
        FormField::Email,
        FormField::VariationCount,
        FormField::Quality,
        FormField::StyleNotes,
        FormField::Image,
        FormField::ImageUrl,
        FormField::Headline,
        FormField::SubHeading,
        FormField::Pointers,
        FormField::Cta,
        FormField::ButtonText,
        FormField::PersonDetails,
        FormField::OtherRequirements,
        FormField::Resolution,
        FormField::WantHeadlineVariations,
    ];

    /// Multipart part name for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::VariationCount => "variationCount",
            FormField::Quality => "quality",
            FormField::StyleNotes => "styleNotes",
            FormField::Image => "image",
            FormField::ImageUrl => "imageUrl",
            FormField::Headline => "headline",
            FormField::SubHeading => "subHeading",
            FormField::Pointers => "pointers",
            FormField::Cta => "cta",
            FormField::ButtonText => "buttonText",
            FormField::PersonDetails => "personDetails",
            FormField::OtherRequirements => "otherRequirements",
            FormField::Resolution => "resolution",
            FormField::WantHeadlineVariations => "wantHeadlineVariations",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// A value written into a form field by an input handler.
///
/// Fields decide which kinds they accept; see [`WebhookForm::apply`](super::WebhookForm::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Flag(bool),
    File(ImageFile),
    /// Reset an optional field to unset
    Clear,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Short description used in type mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Flag(_) => "flag",
            FieldValue::File(_) => "file",
            FieldValue::Clear => "clear",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<ImageFile> for FieldValue {
    fn from(file: ImageFile) -> Self {
        FieldValue::File(file)
    }
}

//! Style variation form: one source image restyled into N variations

use super::field::{FieldValue, FormField};
use super::image::ImageSource;
use super::options::Quality;
use super::traits::{
    FormKind, WebhookForm, count_value, file_value, optional_text_value, text_value,
};
use super::validation::{ValidationErrors, check_email, check_variation_count};
use crate::core::error::DomainError;
use crate::submission::payload::MultipartPayload;

/// Variation count a fresh form starts with
pub const DEFAULT_VARIATION_COUNT: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVariationForm {
    pub email: String,
    pub variation_count: i64,
    pub quality: Option<Quality>,
    pub style_notes: String,
    pub image: ImageSource,
}

impl Default for StyleVariationForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            variation_count: DEFAULT_VARIATION_COUNT,
            quality: None,
            style_notes: String::new(),
            image: ImageSource::default(),
        }
    }
}

impl WebhookForm for StyleVariationForm {
    fn kind(&self) -> FormKind {
        FormKind::StyleVariation
    }

    fn apply(&mut self, field: FormField, value: FieldValue) -> Result<(), DomainError> {
        match field {
            FormField::Email => self.email = text_value(field, value)?.trim().to_string(),
            FormField::VariationCount => self.variation_count = count_value(field, value)?,
            FormField::Quality => {
                self.quality = match optional_text_value(field, value)? {
                    Some(q) => Some(q.parse().map_err(|_| DomainError::InvalidQuality(q))?),
                    None => None,
                };
            }
            FormField::StyleNotes => self.style_notes = text_value(field, value)?,
            FormField::Image => self.image.file = file_value(field, value)?,
            FormField::ImageUrl => self.image.url = optional_text_value(field, value)?,
            other => return Err(DomainError::UnknownField(other)),
        }
        Ok(())
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email);
        if !self.image.is_present() {
            errors.insert(
                FormField::Image,
                "Please upload an image or provide an image URL",
            );
        }
        if self.quality.is_none() {
            errors.insert(FormField::Quality, "Please select a quality level");
        }
        check_variation_count(&mut errors, self.variation_count);
        errors
    }

    fn to_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new()
            .text(FormField::Email, &self.email)
            .text(FormField::VariationCount, self.variation_count.to_string())
            .optional_text(FormField::Quality, self.quality.as_ref().map(Quality::as_str))
            .optional_text(FormField::StyleNotes, Some(self.style_notes.as_str()));

        if let Some(file) = &self.image.file {
            payload = payload.file(FormField::Image, file.clone());
        }
        payload.optional_text(FormField::ImageUrl, self.image.url.as_deref())
    }

    fn variation_count(&self) -> i64 {
        self.variation_count
    }

    fn email(&self) -> &str {
        &self.email
    }
}

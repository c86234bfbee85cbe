//! Ad graphics form: copy, call-to-action and an optional person photo

use super::field::{FieldValue, FormField};
use super::image::ImageFile;
use super::options::Resolution;
use super::traits::{
    FormKind, WebhookForm, count_value, file_value, flag_value, optional_text_value, text_value,
};
use super::validation::{ValidationErrors, check_email, check_variation_count, require_text};
use crate::core::error::DomainError;
use crate::submission::payload::MultipartPayload;

pub const DEFAULT_AD_VARIATION_COUNT: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdGraphicsForm {
    pub variation_count: i64,
    pub headline: String,
    pub sub_heading: String,
    /// Key selling points, free text
    pub pointers: String,
    pub cta: String,
    pub button_text: String,
    pub email: String,
    pub image: Option<ImageFile>,
    pub person_details: String,
    pub other_requirements: String,
    pub resolution: Resolution,
    pub want_headline_variations: bool,
}

impl Default for AdGraphicsForm {
    fn default() -> Self {
        Self {
            variation_count: DEFAULT_AD_VARIATION_COUNT,
            headline: String::new(),
            sub_heading: String::new(),
            pointers: String::new(),
            cta: String::new(),
            button_text: String::new(),
            email: String::new(),
            image: None,
            person_details: String::new(),
            other_requirements: String::new(),
            resolution: Resolution::default(),
            want_headline_variations: false,
        }
    }
}

impl WebhookForm for AdGraphicsForm {
    fn kind(&self) -> FormKind {
        FormKind::AdGraphics
    }

    fn apply(&mut self, field: FormField, value: FieldValue) -> Result<(), DomainError> {
        match field {
            FormField::Email => self.email = text_value(field, value)?.trim().to_string(),
            FormField::VariationCount => self.variation_count = count_value(field, value)?,
            FormField::Headline => self.headline = text_value(field, value)?,
            FormField::SubHeading => self.sub_heading = text_value(field, value)?,
            FormField::Pointers => self.pointers = text_value(field, value)?,
            FormField::Cta => self.cta = text_value(field, value)?,
            FormField::ButtonText => self.button_text = text_value(field, value)?,
            FormField::PersonDetails => self.person_details = text_value(field, value)?,
            FormField::OtherRequirements => self.other_requirements = text_value(field, value)?,
            FormField::Resolution => {
                self.resolution = match optional_text_value(field, value)? {
                    Some(r) => r.parse().map_err(|_| DomainError::InvalidResolution(r))?,
                    None => Resolution::default(),
                };
            }
            FormField::WantHeadlineVariations => {
                self.want_headline_variations = flag_value(field, value)?
            }
            FormField::Image => self.image = file_value(field, value)?,
            other => return Err(DomainError::UnknownField(other)),
        }
        Ok(())
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email);
        require_text(&mut errors, FormField::Headline, &self.headline, "Headline is required");
        require_text(
            &mut errors,
            FormField::SubHeading,
            &self.sub_heading,
            "Sub heading is required",
        );
        require_text(
            &mut errors,
            FormField::Pointers,
            &self.pointers,
            "Key points are required",
        );
        require_text(&mut errors, FormField::Cta, &self.cta, "Call-to-action is required");
        require_text(
            &mut errors,
            FormField::ButtonText,
            &self.button_text,
            "Button text is required",
        );
        check_variation_count(&mut errors, self.variation_count);
        errors
    }

    fn to_payload(&self) -> MultipartPayload {
        let payload = MultipartPayload::new()
            .text(FormField::VariationCount, self.variation_count.to_string())
            .text(FormField::Headline, &self.headline)
            .text(FormField::SubHeading, &self.sub_heading)
            .text(FormField::Pointers, &self.pointers)
            .text(FormField::Cta, &self.cta)
            .text(FormField::ButtonText, &self.button_text)
            .text(FormField::Email, &self.email)
            .optional_text(FormField::PersonDetails, Some(self.person_details.as_str()))
            .optional_text(
                FormField::OtherRequirements,
                Some(self.other_requirements.as_str()),
            )
            .text(FormField::Resolution, self.resolution.as_str())
            .text(
                FormField::WantHeadlineVariations,
                self.want_headline_variations.to_string(),
            );

        match &self.image {
            Some(file) => payload.file(FormField::Image, file.clone()),
            None => payload,
        }
    }

    fn variation_count(&self) -> i64 {
        self.variation_count
    }

    fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AdGraphicsForm {
        AdGraphicsForm {
            headline: "Ship faster".to_string(),
            sub_heading: "Automate your release notes".to_string(),
            pointers: "one click\nno setup".to_string(),
            cta: "Start free".to_string(),
            button_text: "Try it".to_string(),
            email: "ads@startup.dev".to_string(),
            ..AdGraphicsForm::default()
        }
    }

    #[test]
    fn test_image_is_optional() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_blank_copy_fields_are_required() {
        let mut form = filled();
        form.headline = "  ".to_string();
        form.button_text.clear();

        let errors = form.validate();
        assert_eq!(errors.get(FormField::Headline), Some("Headline is required"));
        assert_eq!(
            errors.get(FormField::ButtonText),
            Some("Button text is required")
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_apply_resolution_and_flag() {
        let mut form = filled();
        form.apply(FormField::Resolution, "landscape".into()).unwrap();
        form.apply(FormField::WantHeadlineVariations, FieldValue::Flag(true))
            .unwrap();
        assert_eq!(form.resolution, Resolution::Landscape);
        assert!(form.want_headline_variations);

        assert_eq!(
            form.apply(FormField::Resolution, "wide".into()),
            Err(DomainError::InvalidResolution("wide".to_string()))
        );
    }

    #[test]
    fn test_style_only_fields_are_unknown() {
        let mut form = filled();
        assert_eq!(
            form.apply(FormField::Quality, "high".into()),
            Err(DomainError::UnknownField(FormField::Quality))
        );
    }

    #[test]
    fn test_payload_fields() {
        let mut form = filled();
        form.want_headline_variations = true;
        form.resolution = Resolution::Portrait;

        let payload = form.to_payload();
        assert_eq!(payload.text_value(FormField::Resolution), Some("portrait"));
        assert_eq!(
            payload.text_value(FormField::WantHeadlineVariations),
            Some("true")
        );
        assert!(!payload.has_part(FormField::PersonDetails));
        assert!(!payload.has_file());
    }

    #[test]
    fn test_payload_attaches_image() {
        let mut form = filled();
        form.image = Some(ImageFile::new("me.jpg", "image/jpeg", vec![1u8; 8]));
        assert!(form.to_payload().has_file());
    }
}

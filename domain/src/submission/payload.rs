//! Multipart payload model
//!
//! A transport-neutral description of the multipart body sent to the
//! webhook. The infrastructure adapter turns it into a real request body.

use crate::form::field::FormField;
use crate::form::image::ImageFile;

/// Body of one multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    File(ImageFile),
}

/// One named part of the multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub field: FormField,
    pub body: PartBody,
}

impl Part {
    pub fn name(&self) -> &'static str {
        self.field.as_str()
    }
}

/// Ordered multipart parts, in the order fields are appended
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<Part>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            field,
            body: PartBody::Text(value.into()),
        });
        self
    }

    /// Append a text part only when `value` is set and non-empty
    pub fn optional_text(self, field: FormField, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.text(field, v),
            _ => self,
        }
    }

    pub fn file(mut self, field: FormField, file: ImageFile) -> Self {
        self.parts.push(Part {
            field,
            body: PartBody::File(file),
        });
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Text value of the first part named `field`
    pub fn text_value(&self, field: FormField) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.body {
            PartBody::Text(t) if p.field == field => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn has_part(&self, field: FormField) -> bool {
        self.parts.iter().any(|p| p.field == field)
    }

    pub fn has_file(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p.body, PartBody::File(_)))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

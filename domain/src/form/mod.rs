//! Webhook forms: field state, editing and submit-time validation.
//!
//! - [`StyleVariationForm`]: restyle one image into several variations
//! - [`AdGraphicsForm`]: generate ad creatives from copy and an optional photo
//!
//! Both implement [`WebhookForm`], which is all the submission controller
//! needs to know about a form.

pub mod ad_graphics;
pub mod field;
pub mod image;
pub mod options;
pub mod style_variation;
pub mod traits;
pub mod validation;

pub use ad_graphics::AdGraphicsForm;
pub use field::{FieldValue, FormField};
pub use image::{ImageFile, ImageSource};
pub use options::{Quality, Resolution};
pub use style_variation::StyleVariationForm;
pub use traits::{FormKind, WebhookForm};
pub use validation::{MAX_VARIATIONS, MIN_VARIATIONS, ValidationErrors};

//! Webhook adapter: multipart HTTP delivery and image file loading.

mod gateway;
mod image_loader;

pub use gateway::ReqwestWebhookGateway;
pub use image_loader::{ImageLoadError, load_image_file};

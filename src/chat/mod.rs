// chat/mod.rs - Chat message views

pub mod attachment;
pub mod image_attachment_view;
pub mod image_fetch;

pub use attachment::Attachment;
pub use image_attachment_view::{ChatMessageImageView, ImageAttachmentDelegate, TapOutcome};
pub use image_fetch::{FetchError, FileImageFetcher, Image, ImageFetcher};

// ui/widgets/image_view.rs - Image thumbnail

use crate::ui::theme::{Rgba, Theme};
use crate::ui::view::{Surface, Themeable};

pub const THUMBNAIL_CORNER_RADIUS: f32 = 3.0;
pub const THUMBNAIL_BORDER: Rgba = Rgba::rgba(0xaa, 0xaa, 0xaa, 0x1a);

/// Displays an image, or its placeholder until one arrives.
/// The frame is fixed; themes only reach its surface.
#[derive(Debug, Clone)]
pub struct ImageView {
    pub image: Option<String>,
    pub placeholder: Option<String>,
    pub corner_radius: f32,
    pub border_color: Rgba,
    pub border_width: f32,
}

impl ImageView {
    pub fn new() -> Self {
        Self {
            image: None,
            placeholder: None,
            corner_radius: THUMBNAIL_CORNER_RADIUS,
            border_color: THUMBNAIL_BORDER,
            border_width: 1.0,
        }
    }
}

impl Default for ImageView {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for ImageView {
    fn kind(&self) -> &'static str {
        "image"
    }

    fn apply_theme(&mut self, _theme: &Theme, _surface: &mut Surface) {}

    fn summary(&self) -> String {
        match (&self.image, &self.placeholder) {
            (Some(image), _) => image.clone(),
            (None, Some(placeholder)) => format!("[{}]", placeholder),
            (None, None) => "[empty]".to_string(),
        }
    }

    themeable_any!();
}

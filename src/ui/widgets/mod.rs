// ui/widgets/mod.rs - Themeable widget kinds

use crate::ui::theme::Rgba;

/// `as_any`/`as_any_mut` for a [`Themeable`](crate::ui::view::Themeable) impl
macro_rules! themeable_any {
    () => {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

pub mod bars;
pub mod container;
pub mod image_view;
pub mod indicators;
pub mod label;
pub mod search_bar;
pub mod table;
pub mod text_field;
pub mod text_view;

pub use bars::{NavigationBar, TabBar, TextInputBar, Toolbar};
pub use container::Container;
pub use image_view::ImageView;
pub use indicators::{ActivityIndicator, RefreshControl};
pub use label::Label;
pub use search_bar::SearchBar;
pub use table::{TableCell, TableStyle, TableView};
pub use text_field::TextField;
pub use text_view::{ComposerTextView, TextView};

/// Theme-independent fill used by input fields
pub const FIELD_FILL: Rgba = Rgba::rgba(0x7f, 0x7e, 0x80, 0x0d);

/// Theme-independent hairline border used by input fields
pub const FIELD_BORDER: Rgba = Rgba::rgba(0x7f, 0x7e, 0x80, 0x27);

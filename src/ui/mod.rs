// ui/mod.rs - UI module definitions

pub mod preview;
pub mod renderer;
pub mod system_theme;
pub mod theme;
pub mod theme_loader;
pub mod theme_registry;
pub mod view;
pub mod widgets;

// Re-export commonly used types
pub use system_theme::{SystemTheme, detect_system_theme};
pub use theme::{Rgba, Theme, ThemeVariant};
pub use theme_loader::{ThemeLoader, ThemeLoaderError};
pub use theme_registry::{ObserverHandle, ThemeChangeResult, ThemeObserver, ThemeRegistry};
pub use view::{Surface, ThemeAnchor, Themeable, View};

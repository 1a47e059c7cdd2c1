// Common test utilities for theme propagation tests

use chatshade::ui::{Rgba, Surface, Theme, ThemeAnchor, ThemeObserver, ThemeRegistry, Themeable, View};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Widget that records every theme it is styled with
#[derive(Default)]
pub struct Probe {
    pub label: String,
    pub applied: Vec<String>,
    pub text_color: Option<Rgba>,
    pub global: bool,
}

impl Probe {
    #[allow(dead_code)]
    pub fn named(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn global(label: &str) -> Self {
        Self {
            global: true,
            ..Self::named(label)
        }
    }
}

impl Themeable for Probe {
    fn kind(&self) -> &'static str {
        "probe"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.applied.push(theme.name.clone());
        self.text_color = Some(theme.palette.body_text);
    }

    fn anchor(&self) -> ThemeAnchor {
        if self.global {
            ThemeAnchor::Global
        } else {
            ThemeAnchor::Inherit
        }
    }

    fn summary(&self) -> String {
        self.label.clone()
    }

    fn foreground(&self) -> Option<Rgba> {
        self.text_color
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Themes a probe has been styled with, oldest first
#[allow(dead_code)]
pub fn applied(view: &View) -> Vec<String> {
    view.widget(|probe: &Probe| probe.applied.clone())
        .unwrap_or_default()
}

/// Most recent theme a probe was styled with
#[allow(dead_code)]
pub fn last_applied(view: &View) -> Option<String> {
    applied(view).pop()
}

#[allow(dead_code)]
pub fn text_color(view: &View) -> Option<Rgba> {
    view.widget(|probe: &Probe| probe.text_color).flatten()
}

/// Bare observer counting notifications, for registry-level tests
#[derive(Default)]
pub struct CountingObserver {
    pub calls: Cell<usize>,
    pub last: RefCell<Option<String>>,
}

impl ThemeObserver for CountingObserver {
    fn on_theme_changed(&self, theme: &Theme) {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(theme.name.clone());
    }
}

#[allow(dead_code)]
pub fn registry(theme: Theme) -> Rc<ThemeRegistry> {
    Rc::new(ThemeRegistry::new(theme))
}

/// Unobserved chain root > child > grandchild of probes
#[allow(dead_code)]
pub fn chain(registry: &Rc<ThemeRegistry>) -> (Rc<View>, Rc<View>, Rc<View>) {
    let root = View::new(registry, Probe::named("root"));
    let child = View::new(registry, Probe::named("child"));
    let grandchild = View::new(registry, Probe::named("grandchild"));
    child.add_child(Rc::clone(&grandchild));
    root.add_child(Rc::clone(&child));
    (root, child, grandchild)
}

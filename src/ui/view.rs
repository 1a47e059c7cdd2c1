// ui/view.rs - View tree nodes and theme propagation

use super::theme::{Rgba, Theme};
use super::theme_registry::{ObserverHandle, ThemeObserver, ThemeRegistry};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Where a node kind looks for its theme when it has no override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAnchor {
    /// Inherit from the parent chain, then the registry
    Inherit,
    /// Always the registry's current theme, whatever the ancestors say
    Global,
}

/// Properties every view has, styled before the widget's own rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub background: Rgba,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            background: Rgba::CLEAR,
        }
    }
}

/// Per-kind styling capability implemented by every widget.
///
/// `apply_theme` styles only the widget itself; the owning [`View`] takes
/// care of the surface and of forwarding the theme to children.
pub trait Themeable: 'static {
    fn kind(&self) -> &'static str;

    fn apply_theme(&mut self, theme: &Theme, surface: &mut Surface);

    fn anchor(&self) -> ThemeAnchor {
        ThemeAnchor::Inherit
    }

    /// Short text shown by the preview renderer
    fn summary(&self) -> String {
        String::new()
    }

    /// Primary content color, if the widget has one
    fn foreground(&self) -> Option<Rgba> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A node in the UI tree.
///
/// Children are owned by their parent; the parent link and the registry's
/// observer slot are weak, so dropping the last owner of a subtree frees it.
pub struct View {
    registry: Rc<ThemeRegistry>,
    widget: RefCell<Box<dyn Themeable>>,
    surface: Cell<Surface>,
    theme_override: RefCell<Option<Theme>>,
    parent: RefCell<Weak<View>>,
    children: RefCell<Vec<Rc<View>>>,
    observer: Cell<Option<ObserverHandle>>,
}

impl View {
    pub fn new(registry: &Rc<ThemeRegistry>, widget: impl Themeable) -> Rc<View> {
        Rc::new(Self {
            registry: Rc::clone(registry),
            widget: RefCell::new(Box::new(widget)),
            surface: Cell::new(Surface::default()),
            theme_override: RefCell::new(None),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            observer: Cell::new(None),
        })
    }

    /// Create a view registered with the registry as a theme observer
    pub fn observed(registry: &Rc<ThemeRegistry>, widget: impl Themeable) -> Rc<View> {
        let view = Self::new(registry, widget);
        view.observe();
        view
    }

    /// Register with the registry; themes the view immediately.
    /// Idempotent.
    pub fn observe(self: &Rc<Self>) -> ObserverHandle {
        if let Some(handle) = self.observer.get()
            && self.registry.is_alive(handle)
        {
            return handle;
        }
        let handle = self.registry.add_observer(self);
        self.observer.set(Some(handle));
        handle
    }

    pub fn observer_handle(&self) -> Option<ObserverHandle> {
        self.observer.get()
    }

    pub fn registry(&self) -> &Rc<ThemeRegistry> {
        &self.registry
    }

    /// Style this view and then every descendant, pre-order, with `theme`
    pub fn apply_theme(&self, theme: &Theme) {
        self.style(theme);

        let mut stack: Vec<Rc<View>> = self.children().into_iter().rev().collect();
        while let Some(view) = stack.pop() {
            view.style(theme);
            stack.extend(view.children().into_iter().rev());
        }
    }

    fn style(&self, theme: &Theme) {
        let mut surface = self.surface.get();
        surface.background = theme
            .palette
            .background_color
            .with_alpha(surface.background.a);

        match self.widget.try_borrow_mut() {
            Ok(mut widget) => widget.apply_theme(theme, &mut surface),
            Err(_) => log::warn!("Skipping theme for busy {} view", self.kind()),
        }
        self.surface.set(surface);
    }

    /// Theme this view should render with: its override, the registry's
    /// theme for globally anchored kinds, else the nearest ancestor's
    /// answer, else the registry's current theme.
    pub fn resolve_effective_theme(&self) -> Theme {
        if let Some(theme) = self.own_theme() {
            return theme;
        }

        let mut root_registry = Rc::clone(&self.registry);
        let mut next = self.parent();
        while let Some(node) = next {
            if let Some(theme) = node.own_theme() {
                return theme;
            }
            root_registry = Rc::clone(&node.registry);
            next = node.parent();
        }
        root_registry.current_theme()
    }

    fn own_theme(&self) -> Option<Theme> {
        if let Some(theme) = self.theme_override.borrow().as_ref() {
            return Some(theme.clone());
        }
        match self.anchor() {
            ThemeAnchor::Global => Some(self.registry.current_theme()),
            ThemeAnchor::Inherit => None,
        }
    }

    pub fn theme_override(&self) -> Option<Theme> {
        self.theme_override.borrow().clone()
    }

    /// Set or clear this view's override and restyle its subtree
    pub fn set_theme_override(&self, theme: Option<Theme>) {
        *self.theme_override.borrow_mut() = theme;
        let effective = self.resolve_effective_theme();
        self.apply_theme(&effective);
    }

    pub fn add_child(self: &Rc<Self>, child: Rc<View>) {
        let index = self.children.borrow().len();
        self.insert_child(index, child);
    }

    /// Attach `child` at `index` (clamped), moving it from any previous
    /// parent, and theme it before returning.
    pub fn insert_child(self: &Rc<Self>, index: usize, child: Rc<View>) {
        if Rc::ptr_eq(self, &child) || child.is_ancestor_of(self) {
            log::warn!(
                "Refusing to attach {} view under its own descendant",
                child.kind()
            );
            return;
        }

        child.remove_from_parent();
        {
            let mut children = self.children.borrow_mut();
            let index = index.min(children.len());
            children.insert(index, Rc::clone(&child));
        }
        *child.parent.borrow_mut() = Rc::downgrade(self);

        self.on_child_attached(&child);
    }

    /// Theme a freshly attached child with this view's effective theme
    pub fn on_child_attached(&self, child: &View) {
        let theme = self.resolve_effective_theme();
        log::debug!(
            "Attached {} under {}, theming with '{}'",
            child.kind(),
            self.kind(),
            theme.name
        );
        child.apply_theme(&theme);
    }

    pub fn remove_from_parent(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .children
            .borrow_mut()
            .retain(|c| !std::ptr::eq(Rc::as_ptr(c), self));
        *self.parent.borrow_mut() = Weak::new();
    }

    fn is_ancestor_of(&self, view: &View) -> bool {
        let mut next = view.parent();
        while let Some(node) = next {
            if std::ptr::eq(Rc::as_ptr(&node), self) {
                return true;
            }
            next = node.parent();
        }
        false
    }

    pub fn parent(&self) -> Option<Rc<View>> {
        self.parent.borrow().upgrade()
    }

    pub fn children(&self) -> Vec<Rc<View>> {
        self.children.borrow().clone()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// Visit this view and its descendants pre-order with their depth
    pub fn walk(&self, mut visit: impl FnMut(&View, usize)) {
        visit(self, 0);
        let mut stack: Vec<(Rc<View>, usize)> = self
            .children()
            .into_iter()
            .rev()
            .map(|child| (child, 1))
            .collect();
        while let Some((view, depth)) = stack.pop() {
            visit(&view, depth);
            stack.extend(
                view.children()
                    .into_iter()
                    .rev()
                    .map(|child| (child, depth + 1)),
            );
        }
    }

    pub fn kind(&self) -> &'static str {
        self.widget
            .try_borrow()
            .map(|widget| widget.kind())
            .unwrap_or("view")
    }

    pub fn anchor(&self) -> ThemeAnchor {
        self.widget
            .try_borrow()
            .map(|widget| widget.anchor())
            .unwrap_or(ThemeAnchor::Inherit)
    }

    pub fn summary(&self) -> String {
        self.widget
            .try_borrow()
            .map(|widget| widget.summary())
            .unwrap_or_default()
    }

    pub fn foreground(&self) -> Option<Rgba> {
        self.widget
            .try_borrow()
            .ok()
            .and_then(|widget| widget.foreground())
    }

    pub fn surface(&self) -> Surface {
        self.surface.get()
    }

    pub fn background(&self) -> Rgba {
        self.surface.get().background
    }

    /// Set the background; its alpha is kept across theme changes
    pub fn set_background(&self, color: Rgba) {
        self.surface.set(Surface { background: color });
    }

    /// Read the widget as its concrete type
    pub fn widget<W: Themeable, R>(&self, read: impl FnOnce(&W) -> R) -> Option<R> {
        let widget = self.widget.borrow();
        widget.as_any().downcast_ref::<W>().map(read)
    }

    /// Mutate the widget as its concrete type. Does not restyle.
    pub fn widget_mut<W: Themeable, R>(&self, update: impl FnOnce(&mut W) -> R) -> Option<R> {
        let mut widget = self.widget.borrow_mut();
        widget.as_any_mut().downcast_mut::<W>().map(update)
    }
}

impl ThemeObserver for View {
    fn on_theme_changed(&self, theme: &Theme) {
        self.apply_theme(theme);
    }
}

impl Drop for View {
    fn drop(&mut self) {
        if let Some(handle) = self.observer.take() {
            self.registry.unregister(handle);
        }
    }
}

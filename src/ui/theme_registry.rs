// ui/theme_registry.rs - Current theme and weakly held observers

use super::Theme;
use super::theme_loader::ThemeLoader;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Receives broadcast theme changes from a [`ThemeRegistry`]
pub trait ThemeObserver {
    fn on_theme_changed(&self, theme: &Theme);
}

#[derive(Debug, Clone)]
pub enum ThemeChangeResult {
    Switched(String),
    Error(String),
}

/// Stable identifier of an observer slot.
///
/// The generation changes every time a slot is released, so a handle to a
/// released slot never matches an observer registered later in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle {
    index: usize,
    generation: u32,
}

struct ObserverSlot {
    generation: u32,
    observer: Option<Weak<dyn ThemeObserver>>,
}

#[derive(Default)]
struct Observers {
    slots: Vec<ObserverSlot>,
    free: Vec<usize>,
}

impl Observers {
    fn insert(&mut self, observer: Weak<dyn ThemeObserver>) -> ObserverHandle {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(ObserverSlot {
                    generation: 0,
                    observer: None,
                });
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        slot.observer = Some(observer);
        ObserverHandle {
            index,
            generation: slot.generation,
        }
    }

    fn release(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        if slot.observer.take().is_some() {
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(index);
        }
    }

    fn slot(&self, handle: ObserverHandle) -> Option<&ObserverSlot> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation && slot.observer.is_some())
    }

    /// Release every slot whose observer has been dropped
    fn prune(&mut self) -> usize {
        let dead: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| {
                slot.observer
                    .as_ref()
                    .is_some_and(|weak| weak.strong_count() == 0)
            })
            .map(|(index, _)| index)
            .collect();
        for &index in &dead {
            self.release(index);
        }
        dead.len()
    }

    fn live(&mut self) -> Vec<Rc<dyn ThemeObserver>> {
        self.prune();
        self.slots
            .iter()
            .filter_map(|slot| slot.observer.as_ref().and_then(Weak::upgrade))
            .collect()
    }
}

/// Single source of truth for the active theme.
///
/// One registry is created at startup and handed to every view at
/// construction. It is deliberately `!Send`: theme changes and view-tree
/// mutation happen on one UI context.
pub struct ThemeRegistry {
    current_theme: RefCell<Theme>,
    observers: RefCell<Observers>,
    loader: RefCell<ThemeLoader>,
}

impl ThemeRegistry {
    pub fn new(theme: Theme) -> Self {
        Self::with_loader(theme, ThemeLoader::with_directories(Vec::new()))
    }

    pub fn with_loader(theme: Theme, loader: ThemeLoader) -> Self {
        Self {
            current_theme: RefCell::new(theme),
            observers: RefCell::new(Observers::default()),
            loader: RefCell::new(loader),
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.current_theme.borrow().clone()
    }

    /// Replace the current theme and push it to every live observer.
    ///
    /// Returns how many observers were notified.
    pub fn set_theme(&self, theme: Theme) -> usize {
        *self.current_theme.borrow_mut() = theme.clone();

        // Borrow released before notifying: observers may register or drop views.
        let live = self.observers.borrow_mut().live();
        log::info!(
            "Theme set to '{}', notifying {} observers",
            theme.name,
            live.len()
        );
        for observer in &live {
            observer.on_theme_changed(&theme);
        }
        live.len()
    }

    /// Register `observer` weakly and theme it right away
    pub fn add_observer<O: ThemeObserver + 'static>(&self, observer: &Rc<O>) -> ObserverHandle {
        let weak: Weak<O> = Rc::downgrade(observer);
        let weak: Weak<dyn ThemeObserver> = weak;
        let handle = {
            let mut observers = self.observers.borrow_mut();
            let pruned = observers.prune();
            if pruned > 0 {
                log::debug!("Pruned {} expired theme observers", pruned);
            }
            observers.insert(weak)
        };

        let theme = self.current_theme();
        observer.on_theme_changed(&theme);
        handle
    }

    pub fn is_alive(&self, handle: ObserverHandle) -> bool {
        self.observers
            .borrow()
            .slot(handle)
            .and_then(|slot| slot.observer.as_ref())
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Release `handle`'s slot. Returns false for stale handles.
    ///
    /// Safe to call while a broadcast is in flight; if the observer list
    /// is busy the slot is left for the next lazy prune.
    pub fn unregister(&self, handle: ObserverHandle) -> bool {
        let Ok(mut observers) = self.observers.try_borrow_mut() else {
            return false;
        };
        if observers.slot(handle).is_none() {
            return false;
        }
        observers.release(handle.index);
        true
    }

    /// Number of occupied slots whose observer is still alive
    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .slots
            .iter()
            .filter(|slot| {
                slot.observer
                    .as_ref()
                    .is_some_and(|weak| weak.strong_count() > 0)
            })
            .count()
    }

    /// Number of occupied slots, dead or alive
    pub fn slot_count(&self) -> usize {
        self.observers
            .borrow()
            .slots
            .iter()
            .filter(|slot| slot.observer.is_some())
            .count()
    }

    pub fn list_available_themes(&self) -> Vec<String> {
        self.loader.borrow_mut().list_themes()
    }

    /// Load `name` and make it current. An unknown or broken theme leaves
    /// the current theme untouched.
    pub fn switch_theme(&self, name: &str) -> ThemeChangeResult {
        let loaded = self.loader.borrow().load_theme(name);
        match loaded {
            Ok(theme) => {
                self.set_theme(theme);
                ThemeChangeResult::Switched(name.to_string())
            }
            Err(e) => {
                log::warn!("Theme switch to '{}' failed: {}", name, e);
                ThemeChangeResult::Error(e.to_string())
            }
        }
    }

    pub fn reload_themes(&self) {
        self.loader.borrow_mut().discover_themes();
    }

    pub fn theme_exists(&self, name: &str) -> bool {
        self.loader.borrow().theme_exists(name)
    }

    pub fn get_theme_info(&self, name: &str) -> Option<String> {
        self.loader.borrow().get_theme_info(name).map(|info| {
            format!(
                "{}{}{}",
                info.name,
                info.inherits
                    .as_ref()
                    .map(|p| format!(" (inherits: {})", p))
                    .unwrap_or_default(),
                info.description
                    .as_ref()
                    .map(|d| format!(" - {}", d))
                    .unwrap_or_default()
            )
        })
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<String>>,
    }

    impl ThemeObserver for Recorder {
        fn on_theme_changed(&self, theme: &Theme) {
            self.seen.borrow_mut().push(theme.name.clone());
        }
    }

    #[test]
    fn test_add_observer_applies_current_theme() {
        let registry = ThemeRegistry::new(Theme::light());
        let recorder = Rc::new(Recorder::default());

        registry.add_observer(&recorder);

        assert_eq!(*recorder.seen.borrow(), vec!["light"]);
    }

    #[test]
    fn test_set_theme_notifies_each_live_observer_once() {
        let registry = ThemeRegistry::new(Theme::light());
        let a = Rc::new(Recorder::default());
        let b = Rc::new(Recorder::default());
        registry.add_observer(&a);
        registry.add_observer(&b);

        let notified = registry.set_theme(Theme::dark());

        assert_eq!(notified, 2);
        assert_eq!(*a.seen.borrow(), vec!["light", "dark"]);
        assert_eq!(*b.seen.borrow(), vec!["light", "dark"]);
        assert_eq!(registry.current_theme(), Theme::dark());
    }

    #[test]
    fn test_dead_observer_pruned_on_broadcast() {
        let registry = ThemeRegistry::new(Theme::light());
        let kept = Rc::new(Recorder::default());
        let dropped = Rc::new(Recorder::default());
        registry.add_observer(&kept);
        let handle = registry.add_observer(&dropped);
        drop(dropped);

        assert_eq!(registry.slot_count(), 2);
        assert!(!registry.is_alive(handle));

        let notified = registry.set_theme(Theme::black());

        assert_eq!(notified, 1);
        assert_eq!(registry.slot_count(), 1);
        assert_eq!(registry.observer_count(), 1);
    }

    #[test]
    fn test_dead_observer_pruned_on_add() {
        let registry = ThemeRegistry::new(Theme::light());
        let dropped = Rc::new(Recorder::default());
        registry.add_observer(&dropped);
        drop(dropped);

        let fresh = Rc::new(Recorder::default());
        registry.add_observer(&fresh);

        assert_eq!(registry.slot_count(), 1);
    }

    #[test]
    fn test_unregister_and_stale_handles() {
        let registry = ThemeRegistry::new(Theme::light());
        let first = Rc::new(Recorder::default());
        let handle = registry.add_observer(&first);

        assert!(registry.is_alive(handle));
        assert!(registry.unregister(handle));
        assert!(!registry.unregister(handle));
        assert!(!registry.is_alive(handle));

        // The slot is reused with a new generation.
        let second = Rc::new(Recorder::default());
        let reused = registry.add_observer(&second);
        assert_ne!(reused, handle);
        assert!(!registry.is_alive(handle));
        assert!(registry.is_alive(reused));

        registry.set_theme(Theme::dark());
        assert_eq!(*first.seen.borrow(), vec!["light"]);
        assert_eq!(*second.seen.borrow(), vec!["light", "dark"]);
    }

    #[test]
    fn test_switch_theme_by_name() {
        let registry = ThemeRegistry::new(Theme::dark());
        let recorder = Rc::new(Recorder::default());
        registry.add_observer(&recorder);

        let result = registry.switch_theme("light");
        assert!(matches!(result, ThemeChangeResult::Switched(_)));
        assert_eq!(registry.current_theme().name, "light");
        assert_eq!(*recorder.seen.borrow(), vec!["dark", "light"]);
    }

    #[test]
    fn test_invalid_theme_switch_is_noop() {
        let registry = ThemeRegistry::new(Theme::dark());
        let recorder = Rc::new(Recorder::default());
        registry.add_observer(&recorder);

        let result = registry.switch_theme("nonexistent_theme");
        assert!(matches!(result, ThemeChangeResult::Error(_)));
        assert_eq!(registry.current_theme(), Theme::dark());
        assert_eq!(recorder.seen.borrow().len(), 1);
    }

    #[test]
    fn test_theme_info() {
        let registry = ThemeRegistry::default();
        assert!(registry.theme_exists("black"));
        assert_eq!(
            registry.get_theme_info("black").as_deref(),
            Some("black - built-in")
        );
        assert!(registry.get_theme_info("missing").is_none());
    }

    #[test]
    fn test_registries_are_independent() {
        let first = ThemeRegistry::new(Theme::light());
        let second = ThemeRegistry::new(Theme::light());
        let recorder = Rc::new(Recorder::default());
        first.add_observer(&recorder);

        assert_eq!(second.set_theme(Theme::dark()), 0);
        assert_eq!(recorder.seen.borrow().len(), 1);
        assert_eq!(first.current_theme(), Theme::light());
    }
}

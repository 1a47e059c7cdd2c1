// tests/theme_propagation_test.rs - Registry broadcast and tree propagation

mod common;
use common::{CountingObserver, Probe, applied, chain, last_applied, registry, text_color};

use chatshade::ui::{Theme, View};
use std::rc::Rc;

#[test]
fn test_default_light_then_dark_restyles_node() {
    let registry = registry(Theme::light());
    let a = View::observed(&registry, Probe::named("a"));

    assert_eq!(a.resolve_effective_theme(), Theme::light());
    assert_eq!(text_color(&a), Some(Theme::light().palette.body_text));

    registry.set_theme(Theme::dark());

    assert_eq!(a.resolve_effective_theme(), Theme::dark());
    assert_eq!(text_color(&a), Some(Theme::dark().palette.body_text));
    assert_eq!(a.background(), Theme::dark().palette.background_color.with_alpha(0));
}

#[test]
fn test_attached_child_takes_parent_theme_immediately() {
    let registry = registry(Theme::light());
    let a = View::observed(&registry, Probe::named("a"));
    a.set_theme_override(Some(Theme::dark()));

    let b = View::new(&registry, Probe::named("b"));
    assert!(applied(&b).is_empty());

    a.add_child(Rc::clone(&b));

    assert_eq!(b.resolve_effective_theme(), Theme::dark());
    assert_eq!(applied(&b), vec!["dark"]);
    assert_eq!(text_color(&b), Some(Theme::dark().palette.body_text));
}

#[test]
fn test_attached_subtree_is_styled_entirely() {
    let registry = registry(Theme::black());
    let host = View::observed(&registry, Probe::named("host"));
    let (root, child, grandchild) = chain(&registry);
    let before: Vec<usize> = [&root, &child, &grandchild]
        .iter()
        .map(|view| applied(view).len())
        .collect();

    host.add_child(Rc::clone(&root));

    for (view, count) in [&root, &child, &grandchild].into_iter().zip(before) {
        let seen = applied(view);
        assert_eq!(seen.len(), count + 1);
        assert_eq!(seen.last().map(String::as_str), Some("black"));
    }
}

#[test]
fn test_dropped_node_is_pruned() {
    let registry = registry(Theme::light());
    let a = View::observed(&registry, Probe::named("a"));
    let handle = a.observer_handle().unwrap();
    assert!(registry.is_alive(handle));

    drop(a);

    assert!(!registry.is_alive(handle));
    assert_eq!(registry.set_theme(Theme::dark()), 0);
    assert_eq!(registry.slot_count(), 0);
}

#[test]
fn test_expired_observer_pruned_during_broadcast() {
    let registry = registry(Theme::light());
    let kept = Rc::new(CountingObserver::default());
    let dropped = Rc::new(CountingObserver::default());
    registry.add_observer(&kept);
    let handle = registry.add_observer(&dropped);

    drop(dropped);
    assert_eq!(registry.slot_count(), 2);

    let notified = registry.set_theme(Theme::dark());

    assert_eq!(notified, 1);
    assert!(!registry.is_alive(handle));
    assert_eq!(registry.slot_count(), 1);
    assert_eq!(kept.calls.get(), 2);
}

#[test]
fn test_each_live_observer_notified_once() {
    let registry = registry(Theme::light());
    let observers: Vec<Rc<CountingObserver>> =
        (0..5).map(|_| Rc::new(CountingObserver::default())).collect();
    for observer in &observers {
        registry.add_observer(observer);
    }

    registry.set_theme(Theme::black());

    for observer in &observers {
        // once on registration, once for the broadcast
        assert_eq!(observer.calls.get(), 2);
        assert_eq!(observer.last.borrow().as_deref(), Some("black"));
    }
}

#[test]
fn test_override_node_keeps_its_theme() {
    let registry = registry(Theme::light());
    let root = View::observed(&registry, Probe::named("root"));
    let pinned = View::new(&registry, Probe::named("pinned"));
    let leaf = View::new(&registry, Probe::named("leaf"));
    pinned.add_child(Rc::clone(&leaf));
    root.add_child(Rc::clone(&pinned));
    pinned.set_theme_override(Some(Theme::black()));

    registry.set_theme(Theme::dark());

    assert_eq!(pinned.resolve_effective_theme(), Theme::black());
    // the pushed theme still reaches the subtree
    assert_eq!(last_applied(&leaf).as_deref(), Some("dark"));
    assert_eq!(root.resolve_effective_theme(), Theme::dark());
}

#[test]
fn test_global_kind_ignores_ancestor_override() {
    let registry = registry(Theme::light());
    let root = View::observed(&registry, Probe::named("root"));
    root.set_theme_override(Some(Theme::black()));
    let bar = View::new(&registry, Probe::global("bar"));
    root.add_child(Rc::clone(&bar));

    assert_eq!(bar.resolve_effective_theme(), Theme::light());
    // attach pushes the parent's effective theme
    assert_eq!(applied(&bar), vec!["black"]);

    registry.set_theme(Theme::dark());
    assert_eq!(bar.resolve_effective_theme(), Theme::dark());
    assert_eq!(last_applied(&bar).as_deref(), Some("dark"));
}

#[test]
fn test_apply_theme_twice_is_stable() {
    let registry = registry(Theme::light());
    let (root, child, _grandchild) = chain(&registry);
    root.set_background(chatshade::ui::Rgba::rgb(1, 2, 3));

    root.apply_theme(&Theme::dark());
    let once = (root.surface(), text_color(&child));
    root.apply_theme(&Theme::dark());
    let twice = (root.surface(), text_color(&child));

    assert_eq!(once, twice);
    assert_eq!(root.background(), Theme::dark().palette.background_color);
}

#[test]
fn test_unregister_stops_notifications() {
    let registry = registry(Theme::light());
    let observer = Rc::new(CountingObserver::default());
    let handle = registry.add_observer(&observer);

    assert!(registry.unregister(handle));
    assert!(!registry.unregister(handle));
    registry.set_theme(Theme::dark());

    assert_eq!(observer.calls.get(), 1);
    assert_eq!(registry.observer_count(), 0);
}

#[test]
fn test_registries_are_independent() {
    let first = registry(Theme::light());
    let second = registry(Theme::light());
    let a = View::observed(&first, Probe::named("a"));
    let b = View::observed(&second, Probe::named("b"));

    first.set_theme(Theme::black());

    assert_eq!(a.resolve_effective_theme(), Theme::black());
    assert_eq!(b.resolve_effective_theme(), Theme::light());
}

#[test]
fn test_moved_child_takes_new_parent_theme() {
    let registry = registry(Theme::light());
    let left = View::observed(&registry, Probe::named("left"));
    let right = View::observed(&registry, Probe::named("right"));
    right.set_theme_override(Some(Theme::black()));
    let child = View::new(&registry, Probe::named("child"));

    left.add_child(Rc::clone(&child));
    right.add_child(Rc::clone(&child));

    assert_eq!(left.child_count(), 0);
    assert_eq!(right.child_count(), 1);
    assert_eq!(child.resolve_effective_theme(), Theme::black());
    assert_eq!(applied(&child), vec!["light", "black"]);
}

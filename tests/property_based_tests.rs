// Property-based tests using proptest
// These verify propagation invariants over randomly shaped trees

mod common;
use common::{CountingObserver, Probe, applied, last_applied, registry};

use chatshade::ui::{Theme, ThemeVariant, View};
use proptest::prelude::*;
use std::rc::Rc;

fn variant() -> impl Strategy<Value = ThemeVariant> {
    prop_oneof![
        Just(ThemeVariant::Light),
        Just(ThemeVariant::Dark),
        Just(ThemeVariant::Black),
    ]
}

/// Build a tree from parent indices: node i + 1 hangs under `parents[i] % (i + 1)`
fn build_tree(registry: &Rc<chatshade::ui::ThemeRegistry>, parents: &[usize]) -> Vec<Rc<View>> {
    let mut nodes = vec![View::observed(registry, Probe::named("root"))];
    for (i, parent) in parents.iter().enumerate() {
        let node = View::new(registry, Probe::named(&format!("n{}", i + 1)));
        nodes[parent % (i + 1)].add_child(Rc::clone(&node));
        nodes.push(node);
    }
    nodes
}

// Property: one broadcast styles every node of an observed tree exactly once
proptest! {
    #[test]
    fn broadcast_styles_every_node_once(
        parents in prop::collection::vec(any::<usize>(), 0..40),
        first in variant(),
        second in variant(),
    ) {
        let registry = registry(Theme::from_variant(first));
        let nodes = build_tree(&registry, &parents);
        let before: Vec<usize> = nodes.iter().map(|n| applied(n).len()).collect();

        registry.set_theme(Theme::from_variant(second));

        for (node, count) in nodes.iter().zip(before) {
            let after = applied(node);
            prop_assert_eq!(after.len(), count + 1);
            prop_assert_eq!(after.last().cloned(), Some(second.as_str().to_string()));
        }
    }
}

// Property: nodes attached under a themed tree resolve to the registry theme
proptest! {
    #[test]
    fn attached_nodes_resolve_to_current_theme(
        parents in prop::collection::vec(any::<usize>(), 0..40),
        theme in variant(),
    ) {
        let registry = registry(Theme::from_variant(theme));
        let nodes = build_tree(&registry, &parents);

        for node in &nodes {
            prop_assert_eq!(node.resolve_effective_theme(), Theme::from_variant(theme));
            let seen = last_applied(node);
            prop_assert_eq!(seen, Some(theme.as_str().to_string()));
        }
    }
}

// Property: applying the same theme repeatedly never drifts
proptest! {
    #[test]
    fn apply_theme_is_idempotent(
        parents in prop::collection::vec(any::<usize>(), 0..20),
        theme in variant(),
        repeats in 1usize..5,
    ) {
        let registry = registry(Theme::light());
        let nodes = build_tree(&registry, &parents);
        let theme = Theme::from_variant(theme);

        nodes[0].apply_theme(&theme);
        let once: Vec<_> = nodes.iter().map(|n| (n.surface(), n.foreground())).collect();
        for _ in 0..repeats {
            nodes[0].apply_theme(&theme);
        }
        let again: Vec<_> = nodes.iter().map(|n| (n.surface(), n.foreground())).collect();

        prop_assert_eq!(once, again);
    }
}

// Property: notification count always equals the number of live observers
proptest! {
    #[test]
    fn notified_count_matches_live_observers(
        keep in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let registry = registry(Theme::light());
        let mut kept = Vec::new();
        for &alive in &keep {
            let observer = Rc::new(CountingObserver::default());
            registry.add_observer(&observer);
            if alive {
                kept.push(observer);
            }
        }

        let notified = registry.set_theme(Theme::dark());

        prop_assert_eq!(notified, kept.len());
        prop_assert_eq!(registry.observer_count(), kept.len());
        prop_assert_eq!(registry.slot_count(), kept.len());
        for observer in &kept {
            prop_assert_eq!(observer.calls.get(), 2);
        }
    }
}

// Property: dropping random roots leaves only the survivors registered
proptest! {
    #[test]
    fn dropped_views_leave_registry(
        keep in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let registry = registry(Theme::light());
        let views: Vec<Rc<View>> = keep
            .iter()
            .map(|_| View::observed(&registry, Probe::named("root")))
            .collect();

        let survivors: Vec<Rc<View>> = views
            .into_iter()
            .zip(&keep)
            .filter(|(_, alive)| **alive)
            .map(|(view, _)| view)
            .collect();

        prop_assert_eq!(registry.observer_count(), survivors.len());
        prop_assert_eq!(registry.set_theme(Theme::black()), survivors.len());
        for view in &survivors {
            prop_assert_eq!(view.resolve_effective_theme(), Theme::black());
        }
    }
}

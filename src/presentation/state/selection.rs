//! Active-view selection over a closed identifier set.

/// A closed, ordered set of view identifiers that can be cycled through.
///
/// Implementors list every variant in `ALL`; exhaustiveness of the render
/// match is then enforced by the compiler, not checked at runtime.
pub trait ViewCycle: Copy + Eq + 'static {
    /// All identifiers in display order.
    const ALL: &'static [Self];

    /// The identifier after `self`, wrapping at the end.
    #[must_use]
    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The identifier before `self`, wrapping at the start.
    #[must_use]
    fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Holds which one of a fixed set of views is currently active.
///
/// `select` is a total function: any identifier of the set may be selected
/// from any other, and reselecting the active identifier is a harmless
/// no-op. There is no invalid state; the type parameter is expected to be a
/// closed enum, so an out-of-set value cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<V> {
    active: V,
}

impl<V: Copy + Eq> Selection<V> {
    /// Creates a selection with the given default identifier active.
    #[must_use]
    pub const fn new(initial: V) -> Self {
        Self { active: initial }
    }

    /// The currently active identifier.
    #[must_use]
    pub const fn active(&self) -> V {
        self.active
    }

    /// Replaces the active identifier.
    pub fn select(&mut self, view: V) {
        self.active = view;
    }

    /// Whether the given identifier is the active one.
    #[must_use]
    pub fn is_active(&self, view: V) -> bool {
        self.active == view
    }
}

impl<V: ViewCycle> Selection<V> {
    /// Advances to the next identifier in declaration order.
    pub fn select_next(&mut self) {
        self.active = self.active.next();
    }

    /// Steps back to the previous identifier in declaration order.
    pub fn select_previous(&mut self) {
        self.active = self.active.previous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Pane {
        First,
        Second,
        Third,
    }

    impl ViewCycle for Pane {
        const ALL: &'static [Self] = &[Self::First, Self::Second, Self::Third];
    }

    #[test]
    fn test_select_replaces_active() {
        let mut sel = Selection::new(Pane::First);
        sel.select(Pane::Third);
        assert_eq!(sel.active(), Pane::Third);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut sel = Selection::new(Pane::Second);
        sel.select(Pane::Second);
        assert_eq!(sel.active(), Pane::Second);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut sel = Selection::new(Pane::Third);
        sel.select_next();
        assert_eq!(sel.active(), Pane::First);
        sel.select_previous();
        assert_eq!(sel.active(), Pane::Third);
    }

    #[test]
    fn test_all_transitions_reachable() {
        for from in Pane::ALL {
            for to in Pane::ALL {
                let mut sel = Selection::new(*from);
                sel.select(*to);
                assert_eq!(sel.active(), *to);
            }
        }
    }
}

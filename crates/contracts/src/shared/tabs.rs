//! Tab model shared by every dashboard.
//!
//! A dashboard declares its tab strip once as a `&'static [TabDescriptor]`
//! and a `Copy` enum implementing [`TabView`]. The enum is the lookup table
//! from tab id to view renderer; [`TabView::resolve`] is total and sends any
//! unknown id to [`TabView::DEFAULT`].
//!
//! [`TabController`] holds the active id as a plain string. It does not
//! validate what it is given: ids come either from the tab bar (always
//! valid) or from a deep link, and the content panel resolves both.

use serde::Serialize;
use std::fmt::Debug;

/// One entry of a dashboard's tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

impl TabDescriptor {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Enum of the views a dashboard can show, keyed by tab id.
pub trait TabView: Copy + Eq + Debug + Send + Sync + 'static {
    /// Tab strip in display order.
    const TABS: &'static [TabDescriptor];

    /// View shown on first load and for unrecognised ids.
    const DEFAULT: Self;

    fn id(self) -> &'static str;

    fn from_id(id: &str) -> Option<Self>;

    /// Total id → view mapping.
    fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::DEFAULT)
    }

    fn label(self) -> &'static str {
        let id = self.id();
        Self::TABS
            .iter()
            .find(|tab| tab.id == id)
            .map(|tab| tab.label)
            .unwrap_or(id)
    }
}

/// Active-tab state of one dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    active: String,
}

impl TabController {
    /// Controller positioned on the dashboard's default tab.
    pub fn new<V: TabView>() -> Self {
        Self {
            active: V::DEFAULT.id().to_string(),
        }
    }

    /// Controller positioned on `id`, or on the default tab when `id` is not
    /// one of the dashboard's tabs.
    pub fn starting_at<V: TabView>(id: &str) -> Self {
        Self {
            active: V::resolve(id).id().to_string(),
        }
    }

    /// Replaces the active id. Returns `false` when `id` was already active.
    pub fn select(&mut self, id: &str) -> bool {
        if self.active == id {
            return false;
        }
        self.active.clear();
        self.active.push_str(id);
        true
    }

    pub fn current(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// The view the content panel should mount for the current id.
    pub fn view<V: TabView>(&self) -> V {
        V::resolve(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Demo {
        First,
        Second,
        Third,
    }

    impl TabView for Demo {
        const TABS: &'static [TabDescriptor] = &[
            TabDescriptor::new("first", "First"),
            TabDescriptor::new("second", "Second"),
            TabDescriptor::new("third", "Third"),
        ];
        const DEFAULT: Self = Demo::First;

        fn id(self) -> &'static str {
            match self {
                Demo::First => "first",
                Demo::Second => "second",
                Demo::Third => "third",
            }
        }

        fn from_id(id: &str) -> Option<Self> {
            match id {
                "first" => Some(Demo::First),
                "second" => Some(Demo::Second),
                "third" => Some(Demo::Third),
                _ => None,
            }
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        for tab in Demo::TABS {
            assert_eq!(Demo::resolve(tab.id).id(), tab.id);
        }
        assert_eq!(Demo::resolve("nope"), Demo::resolve("first"));
        assert_eq!(Demo::resolve(""), Demo::DEFAULT);
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(Demo::Second.label(), "Second");
    }

    #[test]
    fn test_controller_select() {
        let mut ctl = TabController::new::<Demo>();
        assert_eq!(ctl.current(), "first");

        assert!(ctl.select("third"));
        assert_eq!(ctl.current(), "third");
        assert!(!ctl.select("third"));
        assert_eq!(ctl.current(), "third");
        assert!(ctl.is_active("third"));
        assert!(!ctl.is_active("first"));
    }

    #[test]
    fn test_controller_keeps_unknown_id_but_view_falls_back() {
        let mut ctl = TabController::new::<Demo>();
        ctl.select("bogus");
        assert_eq!(ctl.current(), "bogus");
        assert_eq!(ctl.view::<Demo>(), Demo::First);
    }

    #[test]
    fn test_controller_starting_at() {
        assert_eq!(TabController::starting_at::<Demo>("second").current(), "second");
        assert_eq!(TabController::starting_at::<Demo>("zzz").current(), "first");
    }
}

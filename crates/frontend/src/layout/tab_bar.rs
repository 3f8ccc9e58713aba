//! Horizontal row of tab buttons driving a [`TabController`].

use crate::shared::theme::use_theme;
use contracts::shared::tabs::{TabController, TabDescriptor};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

pub const TAB_CLASS: &str = "tab-bar__tab";
pub const ACTIVE_TAB_CLASS: &str = "tab-bar__tab tab-bar__tab--active";

/// CSS class of the button for `id` while `current` is active.
pub fn tab_class(current: &str, id: &str) -> &'static str {
    if current == id {
        ACTIVE_TAB_CLASS
    } else {
        TAB_CLASS
    }
}

pub fn tab_appearance(current: &str, id: &str) -> ButtonAppearance {
    if current == id {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Subtle
    }
}

/// Makes `id` the active tab and reports whether it changed.
/// Re-selecting the active tab neither notifies nor logs.
pub fn select_tab(controller: RwSignal<TabController>, id: &str) -> bool {
    let mut changed = false;
    controller.maybe_update(|c| {
        changed = c.select(id);
        changed
    });
    if changed {
        log::debug!("tab selected: {}", id);
    }
    changed
}

/// One button per declared tab, in declaration order.
#[component]
pub fn TabBar(
    tabs: &'static [TabDescriptor],
    controller: RwSignal<TabController>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <nav
            data-zone="tabs"
            class="tab-bar"
            style=format!("--tab-accent: {};", theme.accent())
        >
            {tabs
                .iter()
                .map(|tab| {
                    let id = tab.id;
                    view! {
                        <div
                            class=move || controller.with(|c| tab_class(c.current(), id))
                            data-tab-id=id
                        >
                            <Button
                                appearance=move || controller.with(|c| tab_appearance(c.current(), id))
                                on_click=move |_| {
                                    select_tab(controller, id);
                                }
                            >
                                {tab.label}
                            </Button>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::{d501_sirocco_explained, d502_trial_retention};
    use contracts::dashboards::d501_sirocco_explained::SiroccoTab;

    /// Ids whose button would carry the active class.
    fn active_ids(current: &str, tabs: &'static [TabDescriptor]) -> Vec<&'static str> {
        tabs.iter()
            .filter(|tab| tab_class(current, tab.id) == ACTIVE_TAB_CLASS)
            .map(|tab| tab.id)
            .collect()
    }

    fn assert_highlight_follows_selects(tabs: &'static [TabDescriptor], start: TabController) {
        let mut controller = start;
        let mut steps: Vec<&str> = tabs.iter().rev().map(|tab| tab.id).collect();
        steps.push(tabs[0].id);
        steps.push(tabs[0].id);
        steps.push("bogus");
        steps.push(tabs[1].id);

        for id in steps {
            controller.select(id);
            let active = active_ids(controller.current(), tabs);
            if tabs.iter().any(|tab| tab.id == controller.current()) {
                assert_eq!(active, vec![controller.current()]);
            } else {
                assert!(active.is_empty());
            }
        }
    }

    #[test]
    fn test_highlight_follows_controller_selects() {
        assert_highlight_follows_selects(
            d501_sirocco_explained::TABS,
            TabController::new::<SiroccoTab>(),
        );
        assert_highlight_follows_selects(
            d502_trial_retention::TABS,
            TabController::new::<d502_trial_retention::RetentionTab>(),
        );
    }

    #[test]
    fn test_select_tab_reports_changes_only() {
        let owner = Owner::new();
        owner.with(|| {
            let controller = RwSignal::new(TabController::new::<SiroccoTab>());
            assert!(!select_tab(controller, "overview"));
            assert!(select_tab(controller, "costs"));
            assert!(!select_tab(controller, "costs"));
            assert_eq!(controller.with_untracked(|c| c.current().to_string()), "costs");
        });
    }

    #[test]
    fn test_only_current_tab_is_active() {
        assert_eq!(tab_class("costs", "costs"), ACTIVE_TAB_CLASS);
        assert_eq!(tab_class("costs", "overview"), TAB_CLASS);
        assert!(matches!(
            tab_appearance("ai", "ai"),
            ButtonAppearance::Primary
        ));
        assert!(matches!(
            tab_appearance("ai", "glossary"),
            ButtonAppearance::Subtle
        ));
    }

    #[test]
    fn test_unknown_current_leaves_every_tab_inactive() {
        let ids = ["overview", "screening", "costs", "ai", "glossary"];
        assert!(ids.iter().all(|id| tab_class("bogus", id) == TAB_CLASS));
    }
}

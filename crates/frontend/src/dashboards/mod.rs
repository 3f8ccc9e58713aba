//! The two dashboards and the state wiring they share.
//!
//! Each dashboard owns one `RwSignal<TabController>` created here and hands
//! it to its `TabBar` and `ContentPanel` as a prop.

pub mod d501_sirocco_explained;
pub mod d502_trial_retention;

pub use d501_sirocco_explained::ui::SiroccoDashboard;
pub use d502_trial_retention::ui::RetentionDashboard;

use crate::shared::launch;
use contracts::dashboards::DashboardKind;
use contracts::shared::tabs::{TabController, TabView};
use leptos::prelude::*;

/// Controller of one dashboard, starting at `initial_tab` when it names a
/// declared tab and at the default view otherwise.
///
/// With `sync_url` the active tab is mirrored into the page URL.
pub fn use_tab_controller<V: TabView>(
    kind: DashboardKind,
    initial_tab: Option<String>,
    sync_url: bool,
) -> RwSignal<TabController> {
    let controller = match initial_tab.as_deref() {
        Some(id) => {
            if V::from_id(id).is_none() {
                log::warn!("{}: unknown tab '{}' requested, opening default", kind, id);
            }
            TabController::starting_at::<V>(id)
        }
        None => TabController::new::<V>(),
    };
    let controller = RwSignal::new(controller);

    if sync_url {
        Effect::new(move |_| {
            let current = controller.with(|c| c.current().to_string());
            if let Err(err) = launch::sync_tab_to_url(kind, &current) {
                log::error!("failed to sync tab '{}' to URL: {:?}", current, err);
            }
        });
    }

    controller
}

/// Resolved view of the controller, recomputed only when it changes.
pub fn use_active_view<V: TabView>(controller: RwSignal<TabController>) -> Memo<V> {
    Memo::new(move |_| {
        controller.with(|c| {
            if V::from_id(c.current()).is_none() {
                log::warn!(
                    "no view for tab '{}', showing '{}'",
                    c.current(),
                    V::DEFAULT.id()
                );
            }
            c.view::<V>()
        })
    })
}

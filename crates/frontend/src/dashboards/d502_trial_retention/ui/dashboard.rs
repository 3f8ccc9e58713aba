use super::content::ContentPanel;
use crate::dashboards::use_tab_controller;
use crate::layout::{DashboardFooter, DashboardHeader, TabBar};
use contracts::dashboards::d502_trial_retention::{data, RetentionTab, TABS, TITLE};
use contracts::dashboards::DashboardKind;
use leptos::prelude::*;

/// Patient behaviour and retention overview with six research tabs.
#[component]
pub fn RetentionDashboard(initial_tab: Option<String>, sync_url: bool) -> impl IntoView {
    let controller =
        use_tab_controller::<RetentionTab>(DashboardKind::Retention, initial_tab, sync_url);

    view! {
        <div class="dashboard dashboard--retention" data-dashboard="retention">
            <DashboardHeader title=TITLE subtitle=data::SUBTITLE />
            <TabBar tabs=TABS controller=controller />
            <ContentPanel controller=controller />
            <DashboardFooter sources=data::SOURCES />
        </div>
    }
}

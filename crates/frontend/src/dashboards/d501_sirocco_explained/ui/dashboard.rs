use super::content::ContentPanel;
use crate::dashboards::use_tab_controller;
use crate::layout::{DashboardFooter, DashboardHeader, TabBar};
use contracts::dashboards::d501_sirocco_explained::{data, SiroccoTab, TABS, TITLE};
use contracts::dashboards::DashboardKind;
use leptos::prelude::*;

/// SIROCCO trial explained: header, tab strip, active tab and sources.
#[component]
pub fn SiroccoDashboard(initial_tab: Option<String>, sync_url: bool) -> impl IntoView {
    let controller =
        use_tab_controller::<SiroccoTab>(DashboardKind::Sirocco, initial_tab, sync_url);

    view! {
        <div class="dashboard dashboard--sirocco" data-dashboard="sirocco">
            <DashboardHeader
                title=TITLE
                subtitle=data::INTRO
                hint=(data::NEWCOMER_HINT_TITLE, data::NEWCOMER_HINT)
            />
            <TabBar tabs=TABS controller=controller />
            <ContentPanel controller=controller />
            <DashboardFooter
                sources=data::SOURCES
                label="Data Sources:"
                note=data::FOOTER_NOTE
            />
        </div>
    }
}

use crate::dashboards::{RetentionDashboard, SiroccoDashboard};
use crate::shared::theme::ThemeProvider;
use contracts::dashboards::DashboardKind;
use leptos::prelude::*;
use thaw::ConfigProvider;

/// Root component: Thaw config, the dashboard palette and the selected dashboard.
#[component]
pub fn App(
    kind: DashboardKind,
    /// Tab requested by the launch parameters, resolved by the dashboard.
    initial_tab: Option<String>,
    /// Mirror the active tab into `?app=..&tab=..`.
    sync_url: bool,
) -> impl IntoView {
    let dashboard = match kind {
        DashboardKind::Sirocco => {
            view! { <SiroccoDashboard initial_tab=initial_tab sync_url=sync_url /> }.into_any()
        }
        DashboardKind::Retention => {
            view! { <RetentionDashboard initial_tab=initial_tab sync_url=sync_url /> }.into_any()
        }
    };

    view! {
        <ConfigProvider>
            <ThemeProvider kind=kind>
                {dashboard}
            </ThemeProvider>
        </ConfigProvider>
    }
}

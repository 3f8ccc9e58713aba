use super::tabs;
use crate::dashboards::use_active_view;
use contracts::dashboards::d502_trial_retention::RetentionTab;
use contracts::shared::tabs::TabController;
use leptos::prelude::*;

pub fn render_tab_content(tab: RetentionTab) -> AnyView {
    match tab {
        RetentionTab::Overview => tabs::overview::render().into_any(),
        RetentionTab::Sirocco => tabs::sirocco::render().into_any(),
        RetentionTab::WhyNo => tabs::why_no::render().into_any(),
        RetentionTab::Retention => tabs::retention::render().into_any(),
        RetentionTab::Competitors => tabs::competitors::render().into_any(),
        RetentionTab::Diversity => tabs::diversity::render().into_any(),
    }
}

#[component]
pub fn ContentPanel(controller: RwSignal<TabController>) -> impl IntoView {
    let active = use_active_view::<RetentionTab>(controller);

    view! {
        <main class="tab-content tab-content--retention" data-zone="content">
            {move || render_tab_content(active.get())}
        </main>
    }
}

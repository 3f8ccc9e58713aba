use super::tabs;
use crate::dashboards::use_active_view;
use contracts::dashboards::d501_sirocco_explained::SiroccoTab;
use contracts::shared::tabs::TabController;
use leptos::prelude::*;

/// Renderer of each tab. Exhaustive, so a new variant cannot ship without one.
pub fn render_tab_content(tab: SiroccoTab) -> AnyView {
    match tab {
        SiroccoTab::Overview => tabs::overview::render().into_any(),
        SiroccoTab::Screening => tabs::screening::render().into_any(),
        SiroccoTab::Costs => tabs::costs::render().into_any(),
        SiroccoTab::AiImpact => tabs::ai_impact::render().into_any(),
        SiroccoTab::Glossary => tabs::glossary::render().into_any(),
    }
}

#[component]
pub fn ContentPanel(controller: RwSignal<TabController>) -> impl IntoView {
    let active = use_active_view::<SiroccoTab>(controller);

    view! {
        <main class="tab-content" data-zone="content">
            {move || render_tab_content(active.get())}
        </main>
    }
}

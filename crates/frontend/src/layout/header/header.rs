use crate::shared::theme::use_theme;
use contracts::dashboards::DashboardKind;
use leptos::prelude::*;

/// Title block above the tab bar.
///
/// The SIROCCO dashboard shows a centred white card, the retention dashboard
/// a dark banner.
#[component]
pub fn DashboardHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    /// Highlighted hint under the subtitle: `(bold lead, text)`.
    #[prop(optional)]
    hint: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    let theme = use_theme();
    let class = match theme.kind {
        DashboardKind::Sirocco => "dashboard-header dashboard-header--card",
        DashboardKind::Retention => "dashboard-header dashboard-header--banner",
    };
    let title_style = match theme.kind {
        DashboardKind::Sirocco => format!("color: {};", theme.heading()),
        DashboardKind::Retention => String::new(),
    };

    view! {
        <header data-zone="header" class=class>
            <h1 class="dashboard-header__title" style=title_style>{title}</h1>
            <p class="dashboard-header__subtitle">{subtitle}</p>
            {hint.map(|(lead, text)| view! {
                <div class="dashboard-header__hint">
                    <strong>{lead}</strong> " " {text}
                </div>
            })}
        </header>
    }
}

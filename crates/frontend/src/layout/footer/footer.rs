use leptos::prelude::*;

#[component]
pub fn DashboardFooter(
    sources: &'static str,
    /// Bold lead before the sources, e.g. "Data Sources:".
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional)] note: Option<&'static str>,
) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="dashboard-footer">
            <p class="dashboard-footer__sources">
                {label.map(|l| view! { <strong>{l}</strong> " " })}
                {sources}
            </p>
            {note.map(|text| view! { <p class="dashboard-footer__note">{text}</p> })}
        </footer>
    }
}

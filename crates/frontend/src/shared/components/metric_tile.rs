use crate::shared::theme::tint;
use leptos::prelude::*;

/// Compact coloured tile: big value, label, and an optional source line.
#[component]
pub fn MetricTile(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] source: Option<&'static str>,
    color: &'static str,
) -> impl IntoView {
    let style = format!(
        "background-color: {}; border: 1px solid {};",
        tint(color, "1A"),
        tint(color, "55")
    );

    view! {
        <div class="metric-tile" style=style>
            <div class="metric-tile__value" style=format!("color: {};", color)>{value}</div>
            <div class="metric-tile__label">{label}</div>
            {source.map(|s| view! { <div class="metric-tile__source">{s}</div> })}
        </div>
    }
}

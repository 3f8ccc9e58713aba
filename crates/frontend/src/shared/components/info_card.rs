use crate::shared::theme::PRIMARY;
use leptos::prelude::*;

/// Headline number with icon, subtitle and an italic plain-English note.
///
/// The border and the value take `color`.
#[component]
pub fn InfoCard(
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    subtitle: &'static str,
    explanation: &'static str,
    #[prop(default = PRIMARY)] color: &'static str,
) -> impl IntoView {
    view! {
        <div class="info-card" style=format!("border: 3px solid {};", color)>
            <div class="info-card__head">
                <span class="info-card__icon">{icon}</span>
                <span class="info-card__title">{title}</span>
            </div>
            <div class="info-card__value" style=format!("color: {};", color)>{value}</div>
            <div class="info-card__subtitle">{subtitle}</div>
            <div class="info-card__explanation">{explanation}</div>
        </div>
    }
}

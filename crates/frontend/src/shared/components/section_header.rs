use crate::shared::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    /// Optional plain-English lead paragraph under the title
    #[prop(optional, into)]
    explanation: Option<String>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="section-header">
            <h3 class="section-header__title" style=format!("color: {};", theme.heading())>
                {title}
            </h3>
            {explanation.map(|text| view! { <p class="section-header__explanation">{text}</p> })}
        </div>
    }
}

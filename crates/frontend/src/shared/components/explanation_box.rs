use crate::shared::theme::{tint, use_theme, INFO};
use leptos::prelude::*;

/// Tinted callout with a coloured left border and a "💡" title.
#[component]
pub fn ExplanationBox(
    #[prop(into)] title: String,
    /// Border colour; the background is the same colour at 0x20 alpha.
    #[prop(default = INFO)]
    color: &'static str,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let style = format!(
        "background-color: {}; border-left: 4px solid {};",
        tint(color, "20"),
        color
    );

    view! {
        <div class="explanation-box" style=style>
            <div class="explanation-box__title" style=format!("color: {};", theme.heading())>
                "💡 " {title}
            </div>
            <div class="explanation-box__body">{children()}</div>
        </div>
    }
}

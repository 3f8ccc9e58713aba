//! Tab renderers of the retention dashboard.

pub mod competitors;
pub mod diversity;
pub mod overview;
pub mod retention;
pub mod sirocco;
pub mod why_no;

use crate::shared::theme::{tint, tone_color};
use contracts::shared::display::Tone;
use leptos::prelude::*;

/// Container and heading styles of a tinted panel.
pub fn panel_styles(tone: Tone) -> (String, String) {
    let color = tone_color(tone);
    (
        format!(
            "background-color: {}; border: 1px solid {};",
            tint(color, "12"),
            tint(color, "55")
        ),
        format!("color: {};", color),
    )
}

/// Tinted, bordered block with a coloured heading.
#[component]
pub fn Panel(title: &'static str, tone: Tone, children: Children) -> impl IntoView {
    let (style, heading) = panel_styles(tone);

    view! {
        <section class="panel" style=style>
            <h2 class="panel__title" style=heading>{title}</h2>
            {children()}
        </section>
    }
}

/// White block with a plain heading.
#[component]
pub fn PlainPanel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="panel panel--plain">
            <h3 class="panel__title">{title}</h3>
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_styles_use_tone_color() {
        let (style, heading) = panel_styles(Tone::Red);
        assert_eq!(
            style,
            "background-color: #EF444412; border: 1px solid #EF444455;"
        );
        assert_eq!(heading, "color: #EF4444;");
    }
}

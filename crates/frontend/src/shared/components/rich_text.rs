use contracts::shared::display::TextRun;
use leptos::prelude::*;

/// Inline paragraph content with bold and italic runs.
#[component]
pub fn RichText(runs: &'static [TextRun]) -> impl IntoView {
    runs.iter()
        .map(|run| match *run {
            TextRun::Plain(text) => view! { <span>{text}</span> }.into_any(),
            TextRun::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
            TextRun::Emphasis(text) => view! { <em>{text}</em> }.into_any(),
            TextRun::LineBreak => view! { <br /> }.into_any(),
        })
        .collect_view()
}

use super::explainer;
use crate::shared::theme::PRIMARY;
use contracts::dashboards::d501_sirocco_explained::data::{GlossaryEntry, GLOSSARY, GLOSSARY_INTRO};
use leptos::prelude::*;

fn glossary_card(item: &'static GlossaryEntry) -> impl IntoView {
    view! {
        <div class="glossary-card" style=format!("border-left: 4px solid {};", PRIMARY)>
            <h4 class="glossary-card__term" style=format!("color: {};", PRIMARY)>{item.term}</h4>
            <p class="glossary-card__definition">{item.definition}</p>
            <ul class="glossary-card__bullets">
                {item.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
            </ul>
            <div class="glossary-card__example" style=format!("color: {};", PRIMARY)>
                <strong>"SIROCCO Example:"</strong> " " {item.example}
            </div>
        </div>
    }
}

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            {explainer(GLOSSARY_INTRO)}
            <div class="glossary-list">{GLOSSARY.iter().map(glossary_card).collect_view()}</div>
        </div>
    }
}

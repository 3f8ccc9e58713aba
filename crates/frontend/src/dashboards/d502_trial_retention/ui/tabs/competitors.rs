use super::Panel;
use crate::shared::components::card_animated::stagger;
use crate::shared::components::CardAnimated;
use crate::shared::theme::{BLUE, GREEN, PURPLE};
use contracts::dashboards::d502_trial_retention::data::{
    AiCompetitor, AI_COMPETITORS, AI_COMPETITORS_TITLE, CRO_TITLE, SERVICE_COMPETITORS,
};
use contracts::shared::display::Tone;
use leptos::prelude::*;

fn ai_competitor_card(index: usize, c: &'static AiCompetitor) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=stagger(index)>
            <div class="competitor">
                <div class="competitor__head">
                    <span class="competitor__name" style=format!("color: {};", BLUE)>{c.name}</span>
                    <span class="competitor__focus">{c.focus}</span>
                </div>
                <div class="competitor__metrics">{c.metrics}</div>
                <div class="competitor__highlight">"✓ " {c.highlight}</div>
                <div class="competitor__insight">"💡 " {c.insight}</div>
            </div>
        </CardAnimated>
    }
}

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            <Panel title=AI_COMPETITORS_TITLE tone=Tone::Blue>
                <div class="card-grid card-grid--one">
                    {AI_COMPETITORS
                        .iter()
                        .enumerate()
                        .map(|(i, c)| ai_competitor_card(i, c))
                        .collect_view()}
                </div>
            </Panel>

            <Panel title=CRO_TITLE tone=Tone::Purple>
                <div class="card-grid card-grid--two">
                    {SERVICE_COMPETITORS
                        .iter()
                        .map(|c| {
                            view! {
                                <div class="finding">
                                    <div class="finding__title" style=format!("color: {};", PURPLE)>
                                        {c.name}
                                    </div>
                                    <div class="finding__highlight" style=format!("color: {};", GREEN)>
                                        {c.highlight}
                                    </div>
                                    <div class="finding__note">{c.note}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Panel>
        </div>
    }
}

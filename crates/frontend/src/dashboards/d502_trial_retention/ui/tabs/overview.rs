use crate::shared::components::card_animated::stagger;
use crate::shared::components::{CardAnimated, MetricTile};
use crate::shared::theme::{tint, tone_color, AMBER, ORANGE};
use contracts::dashboards::d502_trial_retention::data::{
    Pillar, CRITICAL_METRICS, KEY_INSIGHT, KEY_INSIGHT_TITLE, OPPORTUNITIES, OPPORTUNITIES_TITLE,
    PILLARS,
};
use leptos::prelude::*;

fn pillar_card(pillar: &'static Pillar) -> impl IntoView {
    let color = tone_color(pillar.tone);
    let style = format!(
        "background-color: {}; border-left: 4px solid {};",
        tint(color, "14"),
        color
    );

    view! {
        <div class="pillar" style=style>
            <h3 class="pillar__title" style=format!("color: {};", color)>{pillar.title}</h3>
            <ul class="pillar__items">
                {pillar.items.iter().map(|item| view! { <li>"• " {*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

pub fn render() -> impl IntoView {
    let banner = format!("background: linear-gradient(to right, {}, {});", ORANGE, AMBER);

    view! {
        <div class="tab-page">
            <div class="insight-banner" style=banner>
                <h2 class="insight-banner__title">{KEY_INSIGHT_TITLE}</h2>
                <p class="insight-banner__text">{KEY_INSIGHT}</p>
            </div>

            <div class="card-grid card-grid--four">
                {CRITICAL_METRICS
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        view! {
                            <CardAnimated delay_ms=stagger(i)>
                                <MetricTile
                                    value=m.value
                                    label=m.label
                                    source=m.source
                                    color=tone_color(m.tone)
                                />
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card-grid card-grid--three">
                {PILLARS.iter().map(pillar_card).collect_view()}
            </div>

            <div class="dark-panel">
                <h3 class="dark-panel__title">{OPPORTUNITIES_TITLE}</h3>
                <div class="card-grid card-grid--three">
                    {OPPORTUNITIES
                        .iter()
                        .map(|o| {
                            view! {
                                <div class="dark-panel__item">
                                    <div class="dark-panel__tag" style=format!("color: {};", tone_color(o.tone))>
                                        {o.tag}
                                    </div>
                                    <p class="dark-panel__text">{o.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

use super::sirocco::noted_rows;
use super::{Panel, PlainPanel};
use crate::shared::components::badges::EffectBadge;
use crate::shared::components::ProgressBar;
use crate::shared::theme::{tone_color, GREEN, RED};
use contracts::dashboards::d502_trial_retention::data::{
    RateBar, COMPENSATION, COMPENSATION_NOTE, DROPOUT_BAR_SCALE, DROPOUT_BY_AREA,
    DROPOUT_BY_PHASE, DROPOUT_RATES_TITLE, INEFFECTIVE_METHODS, SUPPORT_MEASURES,
    WHAT_FAILS_TITLE, WHAT_WORKS_TITLE,
};
use contracts::shared::display::Tone;
use leptos::prelude::*;

fn dropout_bars(title: &'static str, bars: &'static [RateBar]) -> impl IntoView {
    view! {
        <div>
            <h4 class="panel__subtitle">{title}</h4>
            {bars
                .iter()
                .map(|b| {
                    view! {
                        <ProgressBar
                            label=b.label
                            pct=b.pct
                            color=tone_color(b.tone)
                            scale=DROPOUT_BAR_SCALE
                            label_width=96
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

pub fn render() -> impl IntoView {
    let subheading = format!("color: {};", GREEN);

    view! {
        <div class="tab-page">
            <Panel title=WHAT_WORKS_TITLE tone=Tone::Green>
                <div class="card-grid card-grid--two">
                    <div>
                        <h3 class="panel__subtitle" style=subheading.clone()>"💰 Financial Compensation"</h3>
                        {noted_rows(COMPENSATION)}
                        <p class="panel__footnote" style=subheading.clone()>{COMPENSATION_NOTE}</p>
                    </div>
                    <div>
                        <h3 class="panel__subtitle" style=subheading>"🚗 Non-Financial Support"</h3>
                        {SUPPORT_MEASURES
                            .iter()
                            .map(|s| {
                                view! {
                                    <div class="support-row" title=s.note>
                                        <span>{s.support}</span>
                                        <EffectBadge effect=s.effect />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Panel>

            <Panel title=WHAT_FAILS_TITLE tone=Tone::Red>
                <div class="card-grid card-grid--two">
                    {INEFFECTIVE_METHODS
                        .iter()
                        .map(|m| {
                            view! {
                                <div class="finding">
                                    <div class="finding__title" style=format!("color: {};", RED)>
                                        {m.title}
                                    </div>
                                    <div class="finding__detail">{m.detail}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Panel>

            <PlainPanel title=DROPOUT_RATES_TITLE>
                <div class="card-grid card-grid--two">
                    {dropout_bars("By Phase", DROPOUT_BY_PHASE)}
                    {dropout_bars("By Therapeutic Area", DROPOUT_BY_AREA)}
                </div>
            </PlainPanel>
        </div>
    }
}

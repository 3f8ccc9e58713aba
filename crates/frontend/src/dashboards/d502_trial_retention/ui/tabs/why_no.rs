use super::{Panel, PlainPanel};
use crate::shared::components::{AiFitBadge, ProgressBar};
use crate::shared::theme::{tone_color, AMBER, RED};
use contracts::dashboards::d502_trial_retention::data::{
    RankedReason, DECLINE_REASONS, DECLINE_TITLE, DROPOUT_AFTER_ENROLLING, DROPOUT_TITLE,
    SCREEN_FAILURE_BY_AREA, SCREEN_FAILURE_BY_AREA_TITLE,
};
use contracts::shared::display::Tone;
use leptos::prelude::*;

/// Numbered reasons with their share and whether AI can help. `accent` colours
/// the rank circle and the share.
fn ranked_list(reasons: &'static [RankedReason], accent: &'static str) -> impl IntoView {
    reasons
        .iter()
        .map(|r| {
            view! {
                <div class="ranked-reason">
                    <div class="ranked-reason__rank" style=format!("background-color: {};", accent)>
                        {r.rank}
                    </div>
                    <div class="ranked-reason__body">
                        <div class="ranked-reason__head">
                            <strong>{r.reason}</strong>
                            <strong style=format!("color: {};", accent)>{r.pct}</strong>
                        </div>
                        <div class="ranked-reason__desc">{r.desc}</div>
                    </div>
                    <AiFitBadge fit=r.ai upper=true />
                </div>
            }
        })
        .collect_view()
}

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            <Panel title=DECLINE_TITLE tone=Tone::Red>
                {ranked_list(DECLINE_REASONS, RED)}
            </Panel>

            <Panel title=DROPOUT_TITLE tone=Tone::Amber>
                {ranked_list(DROPOUT_AFTER_ENROLLING, AMBER)}
            </Panel>

            <PlainPanel title=SCREEN_FAILURE_BY_AREA_TITLE>
                {SCREEN_FAILURE_BY_AREA
                    .iter()
                    .map(|a| {
                        view! {
                            <ProgressBar
                                label=a.label
                                pct=a.pct
                                color=tone_color(a.tone)
                                label_width=192
                                value_inside=true
                            />
                        }
                    })
                    .collect_view()}
            </PlainPanel>
        </div>
    }
}

use super::PlainPanel;
use crate::shared::components::ProgressBar;
use crate::shared::theme::{tint, tone_color, BLUE, GREEN};
use contracts::dashboards::d502_trial_retention::data::{
    FunnelStep, NotedValue, DROPOUT_REASONS, FUNNEL_LOSSES, FUNNEL_STEPS, PERFORMANCE,
    PERFORMANCE_TITLE, SIROCCO_SUMMARY, SIROCCO_TITLE, TRIAL_COSTS,
};
use contracts::shared::number_format::format_thousands;
use leptos::prelude::*;

/// `"Enrolled: 1,205"`
pub fn funnel_heading(step: &FunnelStep) -> String {
    format!("{}: {}", step.stage, format_thousands(step.patients))
}

fn funnel_step(step: &'static FunnelStep) -> impl IntoView {
    let style = format!(
        "width: {}%; background-color: {};",
        step.width_pct,
        tone_color(step.tone)
    );

    view! {
        <div class="funnel-step" style=style>
            <div class="funnel-step__heading">{funnel_heading(step)}</div>
            <div class="funnel-step__share">{step.share}</div>
        </div>
    }
}

/// Striped three-column rows: label, bold value, muted note.
pub fn noted_rows(rows: &'static [NotedValue]) -> impl IntoView {
    view! {
        <table class="noted-table">
            <tbody>
                {rows
                    .iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.label}</td>
                                <td class="noted-table__value">{row.value}</td>
                                <td class="noted-table__note">{row.note}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            <div class="solid-banner" style=format!("background-color: {};", BLUE)>
                <h2 class="solid-banner__title">{SIROCCO_TITLE}</h2>
                <p>{SIROCCO_SUMMARY}</p>
            </div>

            <PlainPanel title="Patient Flow Funnel">
                <div class="funnel">{FUNNEL_STEPS.iter().map(funnel_step).collect_view()}</div>
                <div class="card-grid card-grid--two">
                    {FUNNEL_LOSSES
                        .iter()
                        .map(|tile| {
                            let color = tone_color(tile.tone);
                            view! {
                                <div class="outcome-tile" style=format!("background-color: {};", tint(color, "22"))>
                                    <div class="outcome-tile__value" style=format!("color: {};", color)>
                                        {tile.value}
                                    </div>
                                    <div class="outcome-tile__label">{tile.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </PlainPanel>

            <div class="card-grid card-grid--two">
                <PlainPanel title="💰 Cost Breakdown">{noted_rows(TRIAL_COSTS)}</PlainPanel>
                <PlainPanel title="📊 Dropout Reasons">
                    {DROPOUT_REASONS
                        .iter()
                        .map(|r| view! { <ProgressBar label=r.label pct=r.pct color=tone_color(r.tone) /> })
                        .collect_view()}
                </PlainPanel>
            </div>

            <div class="performance-box">
                <h3 class="performance-box__title">{PERFORMANCE_TITLE}</h3>
                <div class="card-grid card-grid--three">
                    {PERFORMANCE
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="performance-box__item">
                                    <div class="performance-box__value" style=format!("color: {};", GREEN)>
                                        {f.value}
                                    </div>
                                    <div class="performance-box__label">{f.label}</div>
                                    <div class="performance-box__note">{f.note}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel_heading_groups_thousands() {
        assert_eq!(funnel_heading(&FUNNEL_STEPS[0]), "Screened: 2,681");
        assert_eq!(funnel_heading(&FUNNEL_STEPS[2]), "Completed: 844");
    }
}

use super::{explainer, section};
use crate::dashboards::d501_sirocco_explained::ui::charts::{benchmark_chart, funnel_chart};
use crate::shared::charts::BarChart;
use crate::shared::components::InfoCard;
use crate::shared::theme::tone_color;
use contracts::dashboards::d501_sirocco_explained::data::{
    BENCHMARKS, BENCHMARK_SECTION, FUNNEL, FUNNEL_SECTION, KEY_METRICS, KEY_METRICS_SECTION,
    WHAT_IS_SIROCCO,
};
use leptos::prelude::*;

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            {explainer(WHAT_IS_SIROCCO)}

            {section(KEY_METRICS_SECTION)}
            <div class="card-grid card-grid--wide">
                {KEY_METRICS
                    .iter()
                    .map(|m| {
                        view! {
                            <InfoCard
                                icon=m.icon
                                title=m.title
                                value=m.value
                                subtitle=m.subtitle
                                explanation=m.explanation
                                color=tone_color(m.tone)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            {section(FUNNEL_SECTION)}
            <div class="chart-block">
                <BarChart spec=funnel_chart(FUNNEL) />
            </div>

            {section(BENCHMARK_SECTION)}
            <div class="chart-block">
                <BarChart spec=benchmark_chart(BENCHMARKS) />
            </div>
        </div>
    }
}

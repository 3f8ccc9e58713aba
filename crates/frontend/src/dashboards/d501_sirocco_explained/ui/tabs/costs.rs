use super::{explainer, section};
use crate::dashboards::d501_sirocco_explained::ui::charts::cost_chart;
use crate::shared::charts::BarChart;
use crate::shared::components::RichText;
use crate::shared::theme::{DANGER, PRIMARY};
use contracts::dashboards::d501_sirocco_explained::data::{
    CostDetail, COST_CATEGORIES, COST_CHART_SECTION, COST_DETAILS, COST_DETAIL_SECTION,
    DELAY_COST, DELAY_COST_TITLE, TRIAL_ECONOMICS,
};
use leptos::prelude::*;

fn cost_detail_card(item: &'static CostDetail) -> impl IntoView {
    view! {
        <div class="cost-detail">
            <div class="cost-detail__head">
                <span class="cost-detail__icon">{item.icon}</span>
                <div>
                    <div class="cost-detail__category" style=format!("color: {};", PRIMARY)>
                        {item.category}
                    </div>
                    <div class="cost-detail__amount" style=format!("color: {};", DANGER)>
                        {item.amount}
                    </div>
                </div>
            </div>
            <p class="cost-detail__text">{item.detail}</p>
            <div class="cost-detail__source">"Source: " {item.source}</div>
        </div>
    }
}

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            {explainer(TRIAL_ECONOMICS)}

            {section(COST_CHART_SECTION)}
            <div class="chart-block">
                <BarChart spec=cost_chart(COST_CATEGORIES) />
            </div>

            {section(COST_DETAIL_SECTION)}
            <div class="card-grid card-grid--wide">
                {COST_DETAILS.iter().map(cost_detail_card).collect_view()}
            </div>

            <div class="delay-callout">
                <h4 class="delay-callout__title">{DELAY_COST_TITLE}</h4>
                <p class="delay-callout__text">
                    <RichText runs=DELAY_COST />
                </p>
            </div>
        </div>
    }
}

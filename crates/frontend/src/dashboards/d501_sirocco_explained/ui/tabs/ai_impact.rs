use super::{explainer, section};
use crate::dashboards::d501_sirocco_explained::ui::charts::ai_comparison_chart;
use crate::shared::charts::BarChart;
use crate::shared::components::InfoCard;
use crate::shared::theme::{tone_color, PRIMARY, SUCCESS};
use contracts::dashboards::d501_sirocco_explained::data::{
    AI_COMPARISON, AI_COMPARISON_SECTION, AI_PERFORMANCE, AI_PERFORMANCE_SECTION,
    CITATION_AUTHORS, CITATION_DOI, CITATION_JOURNAL, HOW_AI_CHANGES_SCREENING,
    PROJECTED_SAVINGS, PROJECTION_SECTION, PROJECTION_TITLE,
};
use leptos::prelude::*;

pub fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{}", doi)
}

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            {explainer(HOW_AI_CHANGES_SCREENING)}

            {section(AI_COMPARISON_SECTION)}
            <div class="chart-block">
                <BarChart spec=ai_comparison_chart(AI_COMPARISON) />
            </div>

            {section(AI_PERFORMANCE_SECTION)}
            <div class="card-grid">
                {AI_PERFORMANCE
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

            {section(PROJECTION_SECTION)}
            <div class="projection-box">
                <h4 style=format!("color: {}; margin-top: 0;", SUCCESS)>{PROJECTION_TITLE}</h4>
                <div class="projection-box__grid">
                    {PROJECTED_SAVINGS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="projection-box__item">
                                    <div class="projection-box__value" style=format!("color: {};", SUCCESS)>
                                        {item.value}
                                    </div>
                                    <div class="projection-box__label">{item.label}</div>
                                    <div class="projection-box__calc">{item.calc}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="citation">
                <strong>"Source:"</strong> " " {CITATION_AUTHORS} " "
                <em>{CITATION_JOURNAL}</em> " (Nature). DOI: "
                <a href=doi_url(CITATION_DOI) target="_blank" rel="noopener" style=format!("color: {};", PRIMARY)>
                    {CITATION_DOI}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doi_link() {
        assert_eq!(
            doi_url(CITATION_DOI),
            "https://doi.org/10.1038/s43856-025-01256-0"
        );
    }
}

//! One module per tab; each exposes `render() -> impl IntoView`.

pub mod ai_impact;
pub mod costs;
pub mod glossary;
pub mod overview;
pub mod screening;

use crate::shared::components::{ExplanationBox, RichText, SectionHeader};
use crate::shared::theme::tone_color;
use contracts::dashboards::d501_sirocco_explained::data::{Explainer, Section};
use leptos::prelude::*;

fn explainer(block: Explainer) -> impl IntoView {
    view! {
        <ExplanationBox title=block.title color=tone_color(block.tone)>
            <RichText runs=block.body />
        </ExplanationBox>
    }
}

fn section(block: Section) -> impl IntoView {
    view! { <SectionHeader title=block.title explanation=block.explanation /> }
}

use super::{Panel, PlainPanel};
use crate::shared::components::badges::GapBadge;
use crate::shared::theme::{BLUE, GREEN, RED};
use contracts::dashboards::d502_trial_retention::data::{
    DIVERSITY_SOLUTIONS, FDORA_TEXT, FDORA_TITLE, REPRESENTATION, REPRESENTATION_NOTE,
    REPRESENTATION_TITLE, SOLUTIONS_TITLE, WILLINGNESS, WILLINGNESS_TITLE,
};
use contracts::shared::display::Tone;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

pub fn render() -> impl IntoView {
    view! {
        <div class="tab-page">
            <div class="solid-banner" style=format!("background-color: {};", RED)>
                <h2 class="solid-banner__title">{FDORA_TITLE}</h2>
                <p>{FDORA_TEXT}</p>
            </div>

            <PlainPanel title=REPRESENTATION_TITLE>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Population"</TableHeaderCell>
                            <TableHeaderCell>"US %"</TableHeaderCell>
                            <TableHeaderCell>"Trial %"</TableHeaderCell>
                            <TableHeaderCell>"Gap"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {REPRESENTATION
                            .iter()
                            .map(|r| {
                                view! {
                                    <TableRow>
                                        <TableCell>{r.population}</TableCell>
                                        <TableCell class="text-right">{r.us}</TableCell>
                                        <TableCell class="text-right">{r.trial}</TableCell>
                                        <TableCell class="text-center">
                                            <GapBadge gap=r.gap />
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
                <p class="panel__footnote">{REPRESENTATION_NOTE}</p>
            </PlainPanel>

            <Panel title=WILLINGNESS_TITLE tone=Tone::Green>
                <p>{WILLINGNESS}</p>
            </Panel>

            <Panel title=SOLUTIONS_TITLE tone=Tone::Blue>
                <div class="card-grid card-grid--two">
                    {DIVERSITY_SOLUTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="finding">
                                    <div class="finding__title" style=format!("color: {};", BLUE)>
                                        {s.title}
                                    </div>
                                    <div class="finding__detail" style=format!("color: {};", GREEN)>
                                        {s.detail}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Panel>
        </div>
    }
}

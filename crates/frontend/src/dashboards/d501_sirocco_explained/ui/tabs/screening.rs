use super::{explainer, section};
use crate::dashboards::d501_sirocco_explained::ui::charts::screen_failure_chart;
use crate::shared::charts::BarChart;
use crate::shared::components::{AiFitBadge, RichText};
use crate::shared::theme::{DANGER, PRIMARY};
use contracts::dashboards::d501_sirocco_explained::data::{
    ScreenFailure, FAILURE_CHART_SECTION, FAILURE_TABLE_SECTION, SCREENING_INSIGHT,
    SCREEN_FAILURES, SCREEN_FAILURE_TOTAL_COST, SCREEN_FAILURE_TOTAL_NOTE,
    SCREEN_FAILURE_TOTAL_PATIENTS, WHAT_IS_SCREEN_FAILURE,
};
use contracts::shared::number_format::{format_thousands, format_usd_millions};
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

/// Cells of one breakdown row: patients, share and cost impact.
pub fn failure_row_cells(row: &ScreenFailure) -> (String, String, String) {
    (
        format_thousands(row.patients as i64),
        format!("{:.1}%", row.pct),
        format_usd_millions(row.cost, 2),
    )
}

pub fn render() -> impl IntoView {
    let total_patients = format_thousands(SCREEN_FAILURE_TOTAL_PATIENTS as i64);
    let total_cost = format_usd_millions(SCREEN_FAILURE_TOTAL_COST, 2);
    let total_style = format!("background-color: {}; color: white; font-weight: bold;", PRIMARY);

    view! {
        <div class="tab-page">
            {explainer(WHAT_IS_SCREEN_FAILURE)}

            {section(FAILURE_CHART_SECTION)}
            <div class="chart-block">
                <BarChart spec=screen_failure_chart(SCREEN_FAILURES) />
            </div>

            {section(FAILURE_TABLE_SECTION)}
            <div class="table-scroll breakdown-table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Failure Reason"</TableHeaderCell>
                            <TableHeaderCell>"Patients"</TableHeaderCell>
                            <TableHeaderCell>"% of Total"</TableHeaderCell>
                            <TableHeaderCell>"Cost Impact"</TableHeaderCell>
                            <TableHeaderCell>"Plain English Explanation"</TableHeaderCell>
                            <TableHeaderCell>"AI Preventable?"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {SCREEN_FAILURES
                            .iter()
                            .map(|row| {
                                let (patients, pct, cost) = failure_row_cells(row);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong>{row.detail_reason}</strong>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-center">{patients}</TableCell>
                                        <TableCell class="text-center">{pct}</TableCell>
                                        <TableCell class="text-right">
                                            <strong style=format!("color: {};", DANGER)>{cost}</strong>
                                        </TableCell>
                                        <TableCell class="breakdown-table__explanation">
                                            {row.explanation}
                                        </TableCell>
                                        <TableCell class="text-center">
                                            <AiFitBadge fit=row.ai />
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                        <TableRow attr:style=total_style>
                            <TableCell>"TOTAL"</TableCell>
                            <TableCell class="text-center">{total_patients}</TableCell>
                            <TableCell class="text-center">"100%"</TableCell>
                            <TableCell class="text-right">{total_cost}</TableCell>
                            <TableCell attr:colspan="2" class="breakdown-table__explanation">
                                {SCREEN_FAILURE_TOTAL_NOTE}
                            </TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </div>

            <div class="insight-box">
                <strong class="insight-box__lead">"💡 Key Insight:"</strong>
                <span class="insight-box__text">
                    <RichText runs=SCREENING_INSIGHT />
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_cells() {
        let (patients, pct, cost) = failure_row_cells(&SCREEN_FAILURES[0]);
        assert_eq!(patients, "450");
        assert_eq!(pct, "30.5%");
        assert_eq!(cost, "$3.38M");
    }

    #[test]
    fn test_pct_keeps_trailing_zero() {
        let row = SCREEN_FAILURES
            .iter()
            .find(|r| r.pct == 19.0)
            .map(failure_row_cells);
        assert_eq!(row.map(|(_, pct, _)| pct), Some("19.0%".to_string()));
    }

    #[test]
    fn test_total_row_formatting() {
        assert_eq!(format_thousands(SCREEN_FAILURE_TOTAL_PATIENTS as i64), "1,476");
        assert_eq!(format_usd_millions(SCREEN_FAILURE_TOTAL_COST, 2), "$10.88M");
    }
}

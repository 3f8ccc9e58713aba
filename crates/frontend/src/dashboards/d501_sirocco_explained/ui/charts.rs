//! Chart specs of the SIROCCO dashboard, built from the static dataset.

use crate::shared::charts::{BarChartSpec, BarSeries, Orientation, TickFormat};
use crate::shared::theme::{tone_color, ACCENT, DANGER, INFO, PRIMARY, SECONDARY, SUCCESS};
use contracts::dashboards::d501_sirocco_explained::data::{
    AiComparison, BenchmarkComparison, CostCategory, FunnelStage, ScreenFailure,
};
use contracts::shared::number_format::{
    format_patients, format_percent, format_thousands, format_usd, format_usd_compact,
};

/// Screened → enrolled → completed, one colour per stage.
pub fn funnel_chart(stages: &[FunnelStage]) -> BarChartSpec {
    BarChartSpec::new(
        Orientation::Horizontal,
        stages.iter().map(|s| s.name.to_string()).collect(),
    )
    .series(BarSeries::new(
        "Patients",
        SECONDARY,
        stages.iter().map(|s| s.value).collect(),
        format_patients,
    ))
    .bar_colors(
        stages
            .iter()
            .map(|s| tone_color(s.tone).to_string())
            .collect(),
    )
    .height(300)
}

pub fn benchmark_chart(rows: &[BenchmarkComparison]) -> BarChartSpec {
    BarChartSpec::new(
        Orientation::Vertical,
        rows.iter().map(|r| r.metric.to_string()).collect(),
    )
    .series(BarSeries::new(
        "SIROCCO",
        ACCENT,
        rows.iter().map(|r| r.sirocco).collect(),
        format_percent,
    ))
    .series(BarSeries::new(
        "Industry Avg",
        INFO,
        rows.iter().map(|r| r.industry).collect(),
        format_percent,
    ))
    .ticks(TickFormat::Percent)
    .with_legend()
    .height(280)
}

pub fn screen_failure_chart(rows: &[ScreenFailure]) -> BarChartSpec {
    BarChartSpec::new(
        Orientation::Horizontal,
        rows.iter().map(|r| r.reason.to_string()).collect(),
    )
    .series(BarSeries::new(
        "Patients",
        DANGER,
        rows.iter().map(|r| r.patients).collect(),
        format_patients,
    ))
    .category_axis(140)
    .height(350)
}

/// Per-patient cost by category; the tooltip adds the category description.
pub fn cost_chart(rows: &[CostCategory]) -> BarChartSpec {
    BarChartSpec::new(
        Orientation::Vertical,
        rows.iter().map(|r| r.category.to_string()).collect(),
    )
    .tooltip_titles(
        rows.iter()
            .map(|r| format!("{}: {}", r.category, r.description))
            .collect(),
    )
    .series(BarSeries::new(
        "Cost per Patient",
        PRIMARY,
        rows.iter().map(|r| r.per_patient).collect(),
        format_usd,
    ))
    .ticks(TickFormat::UsdThousands)
    .tilt_labels()
    .category_axis(80)
    .height(350)
}

/// Tooltip value of one AI comparison cell: money as currency, else count and unit.
pub fn ai_tooltip_value(value: f64, unit: &str) -> String {
    match unit {
        "dollars" => format_usd_compact(value),
        _ => format!("{} {}", format_thousands(value.round() as i64), unit),
    }
}

/// Manual vs AI-assisted screening. Each tooltip value carries the metric unit.
pub fn ai_comparison_chart(rows: &[AiComparison]) -> BarChartSpec {
    let with_unit = |pick: fn(&AiComparison) -> f64| {
        (
            rows.iter().map(pick).collect::<Vec<_>>(),
            rows.iter()
                .map(|r| ai_tooltip_value(pick(r), r.unit))
                .collect::<Vec<_>>(),
        )
    };
    let (manual, manual_tips) = with_unit(|r| r.manual);
    let (assisted, assisted_tips) = with_unit(|r| r.ai_assisted);

    BarChartSpec::new(
        Orientation::Vertical,
        rows.iter().map(|r| r.metric.to_string()).collect(),
    )
    .series(BarSeries {
        name: "Manual Process".to_string(),
        color: DANGER.to_string(),
        values: manual,
        tooltips: manual_tips,
    })
    .series(BarSeries {
        name: "AI-Assisted".to_string(),
        color: SUCCESS.to_string(),
        values: assisted,
        tooltips: assisted_tips,
    })
    .with_legend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d501_sirocco_explained::data::{
        AI_COMPARISON, BENCHMARKS, COST_CATEGORIES, FUNNEL, SCREEN_FAILURES,
    };

    #[test]
    fn test_builders_are_pure() {
        assert_eq!(funnel_chart(FUNNEL), funnel_chart(FUNNEL));
        assert_eq!(cost_chart(COST_CATEGORIES), cost_chart(COST_CATEGORIES));
        assert_eq!(
            ai_comparison_chart(AI_COMPARISON),
            ai_comparison_chart(AI_COMPARISON)
        );
    }

    #[test]
    fn test_funnel_uses_stage_colors() {
        let spec = funnel_chart(FUNNEL);
        assert_eq!(spec.categories, vec!["Screened", "Enrolled", "Completed"]);
        assert_eq!(spec.bar_color(0, 0), SECONDARY);
        assert_eq!(spec.bar_color(0, 1), SUCCESS);
        assert_eq!(spec.bar_color(0, 2), PRIMARY);
        assert_eq!(spec.series[0].tooltips[0], "2,681 patients");
    }

    #[test]
    fn test_benchmark_has_two_series_and_legend() {
        let spec = benchmark_chart(BENCHMARKS);
        assert!(spec.legend);
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.ticks, TickFormat::Percent);
        let lines = spec.tooltip_lines(0);
        assert_eq!(lines[0].0, "SIROCCO");
        assert_eq!(lines[0].2, "55%");
        assert_eq!(lines[1].2, "36%");
    }

    #[test]
    fn test_screen_failures_follow_dataset_order() {
        let spec = screen_failure_chart(SCREEN_FAILURES);
        assert_eq!(spec.categories.len(), SCREEN_FAILURES.len());
        assert_eq!(spec.categories[0], "Low Eosinophils");
        assert_eq!(spec.max_value(), 450.0);
        assert_eq!(spec.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_cost_tooltip_carries_description() {
        let spec = cost_chart(COST_CATEGORIES);
        assert_eq!(
            spec.tooltip_title(0),
            "Site Payments: Hospitals/clinics get paid for each enrolled patient"
        );
        assert_eq!(spec.series[0].tooltips[0], "$25,000");
        assert!(spec.tilt_labels);
    }

    #[test]
    fn test_ai_tooltips_name_each_series() {
        let spec = ai_comparison_chart(AI_COMPARISON);
        let lines = spec.tooltip_lines(0);
        assert_eq!(lines[0].0, "Manual Process");
        assert_eq!(lines[0].2, "50 minutes");
        assert_eq!(lines[1].0, "AI-Assisted");
        assert_eq!(lines[1].2, "9 minutes");
        assert_eq!(spec.tooltip_lines(2)[1].2, "50 patients");
    }

    #[test]
    fn test_ai_cost_tooltip_is_currency() {
        let lines = ai_comparison_chart(AI_COMPARISON).tooltip_lines(1);
        assert_eq!(lines[0].2, "$42");
        assert_eq!(lines[1].2, "$5");
        assert_eq!(ai_tooltip_value(1_250.0, "dollars"), "$1k");
        assert_eq!(ai_tooltip_value(1_250.0, "patients"), "1,250 patients");
    }
}

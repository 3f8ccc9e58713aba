//! Renders a [`BarChartSpec`] with ECharts through `charming`.
//!
//! The option is assembled by [`build_chart`]; tooltip markup is precomputed
//! per category so the library only looks it up by data index.

use super::model::{BarChartSpec, Orientation, TickFormat};
use charming::component::{Axis, Grid, Legend};
use charming::datatype::DataPointItem;
use charming::element::{
    AxisLabel, AxisType, Formatter, JsFunction, ItemStyle, Tooltip, Trigger,
};
use charming::series::Bar;
use charming::{Chart, WasmRenderer};
use leptos::html::Div;
use leptos::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canvas width in px; the container scrolls when narrower.
pub const CHART_WIDTH: u32 = 800;
const GRID_TOP: u32 = 12;
const GRID_RIGHT: u32 = 20;
const VALUE_AXIS: u32 = 56;
const LEGEND_HEIGHT: u32 = 28;

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

/// Grid margins `(left, bottom)` in px.
pub fn grid_margins(spec: &BarChartSpec) -> (u32, u32) {
    let legend = if spec.legend { LEGEND_HEIGHT } else { 0 };
    match spec.orientation {
        Orientation::Vertical => (VALUE_AXIS, spec.category_axis + legend),
        Orientation::Horizontal => (spec.category_axis, VALUE_AXIS / 2 + legend),
    }
}

/// Tooltip body of one category: the title, then one coloured line per series.
pub fn tooltip_html(spec: &BarChartSpec, category: usize) -> String {
    let mut html = format!("<strong>{}</strong>", spec.tooltip_title(category));
    for (name, color, value) in spec.tooltip_lines(category) {
        html.push_str(&format!(
            "<br/><span style=\"color: {};\">{} : {}</span>",
            color, name, value
        ));
    }
    html
}

/// Formatter body picking the precomputed tooltip of the hovered category.
pub fn tooltip_script(spec: &BarChartSpec) -> String {
    let tips: Vec<String> = (0..spec.categories.len())
        .map(|index| tooltip_html(spec, index))
        .collect();
    let tips = serde_json::to_string(&tips).unwrap_or_else(|err| {
        log::error!("failed to encode chart tooltips: {}", err);
        "[]".to_string()
    });
    format!(
        "var tips = {}; var p = Array.isArray(params) ? params[0] : params; return tips[p.dataIndex] || '';",
        tips
    )
}

fn tick_formatter(ticks: TickFormat) -> Option<Formatter> {
    match ticks {
        TickFormat::Plain => None,
        TickFormat::Percent => Some(Formatter::String("{value}%".to_string())),
        TickFormat::UsdThousands => Some(Formatter::Function(JsFunction::new_with_args(
            "value",
            "return '$' + Math.round(value / 100) / 10 + 'k';",
        ))),
    }
}

fn px(value: u32) -> String {
    value.to_string()
}

/// ECharts option of `spec`.
pub fn build_chart(spec: &BarChartSpec) -> Chart {
    let (left, bottom) = grid_margins(spec);

    let mut category_label = AxisLabel::new();
    if spec.tilt_labels {
        category_label = category_label.rotate(-20.0);
    }
    let category_axis = Axis::new()
        .type_(AxisType::Category)
        .data(spec.categories.clone())
        .axis_label(category_label);

    let mut value_label = AxisLabel::new();
    if let Some(formatter) = tick_formatter(spec.ticks) {
        value_label = value_label.formatter(formatter);
    }
    let value_axis = Axis::new().type_(AxisType::Value).axis_label(value_label);

    let mut chart = Chart::new()
        .grid(
            Grid::new()
                .left(px(left).as_str())
                .right(px(GRID_RIGHT).as_str())
                .top(px(GRID_TOP).as_str())
                .bottom(px(bottom).as_str()),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .formatter(Formatter::Function(JsFunction::new_with_args(
                    "params",
                    tooltip_script(spec).as_str(),
                ))),
        );

    chart = match spec.orientation {
        Orientation::Vertical => chart.x_axis(category_axis).y_axis(value_axis),
        // first category on top
        Orientation::Horizontal => chart.x_axis(value_axis).y_axis(category_axis.inverse(true)),
    };

    if spec.legend {
        chart = chart.legend(Legend::new().bottom("0"));
    }

    for (index, series) in spec.series.iter().enumerate() {
        let data: Vec<DataPointItem> = series
            .values
            .iter()
            .enumerate()
            .map(|(category, value)| {
                DataPointItem::new(*value)
                    .item_style(ItemStyle::new().color(spec.bar_color(index, category)))
            })
            .collect();
        chart = chart.series(
            Bar::new()
                .name(series.name.as_str())
                .item_style(ItemStyle::new().color(series.color.as_str()))
                .data(data),
        );
    }

    chart
}

/// Bar chart canvas. ECharts draws into the element once it is mounted.
#[component]
pub fn BarChart(spec: BarChartSpec) -> impl IntoView {
    let id = format!("bar-chart-{}", NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed));
    let height = spec.height;
    let chart = build_chart(&spec);
    let container = NodeRef::<Div>::new();

    let target = id.clone();
    Effect::new(move |_| {
        if container.get().is_none() {
            return;
        }
        if let Err(err) = WasmRenderer::new(CHART_WIDTH, height).render(&target, &chart) {
            log::error!("failed to render chart {}: {:?}", target, err);
        }
    });

    view! {
        <div class="bar-chart">
            <div id=id node_ref=container style=format!("height: {}px;", height)></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::model::BarSeries;

    fn grouped() -> BarChartSpec {
        BarChartSpec::new(Orientation::Vertical, vec!["A".into(), "B".into()])
            .series(BarSeries::new("One", "#111111", vec![10.0, 20.0], |v| {
                format!("{}!", v)
            }))
            .series(BarSeries::new("Two", "#222222", vec![20.0, 5.0], |v| {
                format!("{}?", v)
            }))
    }

    #[test]
    fn test_grid_reserves_category_labels() {
        let funnel = BarChartSpec::new(Orientation::Horizontal, vec!["Screened".into()]);
        assert_eq!(grid_margins(&funnel), (100, VALUE_AXIS / 2));
        assert_eq!(grid_margins(&grouped()), (VALUE_AXIS, 40));
        assert_eq!(
            grid_margins(&grouped().with_legend()),
            (VALUE_AXIS, 40 + LEGEND_HEIGHT)
        );
    }

    #[test]
    fn test_tooltip_html_lists_every_series() {
        assert_eq!(
            tooltip_html(&grouped(), 1),
            "<strong>B</strong>\
             <br/><span style=\"color: #111111;\">One : 20!</span>\
             <br/><span style=\"color: #222222;\">Two : 5?</span>"
        );
    }

    #[test]
    fn test_tooltip_script_indexes_categories() {
        let script = tooltip_script(&grouped());
        assert!(script.starts_with("var tips = [\"<strong>A</strong>"));
        assert!(script.contains("<strong>B</strong>"));
        assert!(script.ends_with("return tips[p.dataIndex] || '';"));
    }

    #[test]
    fn test_tick_formatter_per_format() {
        assert!(tick_formatter(TickFormat::Plain).is_none());
        assert!(matches!(
            tick_formatter(TickFormat::Percent),
            Some(Formatter::String(template)) if template == "{value}%"
        ));
        assert!(matches!(
            tick_formatter(TickFormat::UsdThousands),
            Some(Formatter::Function(_))
        ));
    }
}

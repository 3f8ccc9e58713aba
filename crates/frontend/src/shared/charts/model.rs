//! Plain-data description of a bar chart.
//!
//! Builders in the dashboards produce a [`BarChartSpec`]; [`BarChart`] turns
//! it into an ECharts option. Specs compare with `==`, so building one twice
//! from the same dataset gives the same value.
//!
//! [`BarChart`]: super::render::BarChart

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Columns rising from a horizontal category axis.
    #[default]
    Vertical,
    /// Bars growing right from a vertical category axis.
    Horizontal,
}

/// Labels of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickFormat {
    /// Library default, `3,000`
    #[default]
    Plain,
    /// `55%`
    Percent,
    /// `$25k`
    UsdThousands,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
    /// Preformatted tooltip value per category.
    pub tooltips: Vec<String>,
}

impl BarSeries {
    /// Series whose tooltip texts come from `format`.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        values: Vec<f64>,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let tooltips = values.iter().map(|v| format(*v)).collect();
        Self {
            name: name.into(),
            color: color.into(),
            values,
            tooltips,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub categories: Vec<String>,
    /// Tooltip heading per category; the category name when empty.
    pub tooltip_titles: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Per-category fill overriding the series colour (single-series charts).
    pub bar_colors: Option<Vec<String>>,
    pub orientation: Orientation,
    pub ticks: TickFormat,
    pub legend: bool,
    /// Height of the canvas in px.
    pub height: u32,
    /// Grid margin reserved for category labels: left of horizontal charts,
    /// bottom of vertical ones.
    pub category_axis: u32,
    /// Tilt vertical category labels by -20°.
    pub tilt_labels: bool,
}

impl BarChartSpec {
    pub fn new(orientation: Orientation, categories: Vec<String>) -> Self {
        Self {
            categories,
            tooltip_titles: Vec::new(),
            series: Vec::new(),
            bar_colors: None,
            orientation,
            ticks: TickFormat::default(),
            legend: false,
            height: 300,
            category_axis: match orientation {
                Orientation::Vertical => 40,
                Orientation::Horizontal => 100,
            },
            tilt_labels: false,
        }
    }

    pub fn series(mut self, series: BarSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn tooltip_titles(mut self, titles: Vec<String>) -> Self {
        self.tooltip_titles = titles;
        self
    }

    pub fn bar_colors(mut self, colors: Vec<String>) -> Self {
        self.bar_colors = Some(colors);
        self
    }

    pub fn ticks(mut self, ticks: TickFormat) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn category_axis(mut self, px: u32) -> Self {
        self.category_axis = px;
        self
    }

    pub fn tilt_labels(mut self) -> Self {
        self.tilt_labels = true;
        self
    }

    /// Largest value over all series, `0.0` for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn tooltip_title(&self, category: usize) -> &str {
        self.tooltip_titles
            .get(category)
            .or_else(|| self.categories.get(category))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Fill of one bar: the per-category colour if set, else the series colour.
    pub fn bar_color(&self, series: usize, category: usize) -> &str {
        self.bar_colors
            .as_ref()
            .and_then(|colors| colors.get(category))
            .or_else(|| self.series.get(series).map(|s| &s.color))
            .map(String::as_str)
            .unwrap_or("#999999")
    }

    /// `(series name, colour, formatted value)` lines of one category's tooltip.
    pub fn tooltip_lines(&self, category: usize) -> Vec<(String, String, String)> {
        self.series
            .iter()
            .enumerate()
            .filter_map(|(index, s)| {
                s.tooltips.get(category).map(|text| {
                    (
                        s.name.clone(),
                        self.bar_color(index, category).to_string(),
                        text.clone(),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_series() -> BarChartSpec {
        BarChartSpec::new(
            Orientation::Vertical,
            vec!["A".to_string(), "B".to_string()],
        )
        .series(BarSeries::new("One", "#111111", vec![3.0, 9.0], |v| {
            format!("{}!", v)
        }))
        .series(BarSeries::new("Two", "#222222", vec![4.0, 1.0], |v| {
            format!("{}?", v)
        }))
    }

    #[test]
    fn test_max_value() {
        assert_eq!(two_series().max_value(), 9.0);
        assert_eq!(
            BarChartSpec::new(Orientation::Horizontal, vec![]).max_value(),
            0.0
        );
    }

    #[test]
    fn test_tooltip_title_falls_back_to_category() {
        let spec = two_series();
        assert_eq!(spec.tooltip_title(1), "B");
        let spec = spec.tooltip_titles(vec!["A: first".to_string()]);
        assert_eq!(spec.tooltip_title(0), "A: first");
        assert_eq!(spec.tooltip_title(1), "B");
        assert_eq!(spec.tooltip_title(7), "");
    }

    #[test]
    fn test_tooltip_lines_list_every_series() {
        let lines = two_series().tooltip_lines(1);
        assert_eq!(
            lines,
            vec![
                ("One".to_string(), "#111111".to_string(), "9!".to_string()),
                ("Two".to_string(), "#222222".to_string(), "1?".to_string()),
            ]
        );
    }

    #[test]
    fn test_bar_colors_override_series_color() {
        let spec = two_series().bar_colors(vec!["#AAAAAA".to_string()]);
        assert_eq!(spec.bar_color(0, 0), "#AAAAAA");
        assert_eq!(spec.bar_color(0, 1), "#111111");
    }
}

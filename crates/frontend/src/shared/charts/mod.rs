//! Bar charts rendered by ECharts.

pub mod model;
pub mod render;

pub use model::{BarChartSpec, BarSeries, Orientation, TickFormat};
pub use render::BarChart;

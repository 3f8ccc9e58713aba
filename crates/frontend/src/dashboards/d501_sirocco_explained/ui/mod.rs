pub mod charts;
pub mod content;
pub mod dashboard;
pub mod tabs;

pub use dashboard::SiroccoDashboard;

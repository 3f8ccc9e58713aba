pub mod content;
pub mod dashboard;
pub mod tabs;

pub use dashboard::RetentionDashboard;

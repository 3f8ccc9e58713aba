//! Page chrome shared by both dashboards.
//!
//! ```text
//! +------------------------------------------+
//! |   DashboardHeader (title, subtitle)      |
//! +------------------------------------------+
//! |   TabBar                                 |
//! +------------------------------------------+
//! |   ContentPanel (per dashboard)           |
//! +------------------------------------------+
//! |   DashboardFooter (sources)              |
//! +------------------------------------------+
//! ```

pub mod footer;
pub mod header;
pub mod tab_bar;

pub use footer::DashboardFooter;
pub use header::DashboardHeader;
pub use tab_bar::TabBar;

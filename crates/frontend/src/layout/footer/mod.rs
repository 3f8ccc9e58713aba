pub mod footer;

pub use footer::DashboardFooter;

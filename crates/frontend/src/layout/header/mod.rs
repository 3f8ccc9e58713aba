pub mod header;

pub use header::DashboardHeader;

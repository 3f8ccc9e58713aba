//! Shared, target-independent model of the clinical-trial dashboards.
//!
//! Everything here compiles for both the wasm frontend and native test runs:
//!
//! - [`shared::tabs`]: tab descriptors, the [`shared::tabs::TabView`] lookup
//!   trait and the [`shared::tabs::TabController`] selection state.
//! - [`shared::number_format`]: display formatting for currency, percentages
//!   and patient counts.
//! - [`dashboards`]: the static datasets and tab sets of each dashboard.

pub mod dashboards;
pub mod shared;

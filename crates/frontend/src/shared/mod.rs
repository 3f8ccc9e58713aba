pub mod charts;
pub mod components;
pub mod launch;
pub mod theme;

pub mod display;
pub mod number_format;
pub mod tabs;

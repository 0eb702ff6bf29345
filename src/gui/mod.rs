pub mod app;
pub mod attach;
pub mod indicator;
pub mod theme;

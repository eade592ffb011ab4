// Presentation layer - HTTP surface for the chart sink
pub mod app_state;
pub mod handlers;

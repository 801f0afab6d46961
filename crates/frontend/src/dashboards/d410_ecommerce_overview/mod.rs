pub mod api;
pub mod chart_data;
pub mod ui;

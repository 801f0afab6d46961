pub mod dashboard;
pub mod raw_data_panel;
pub mod summary_bar;

pub use dashboard::EcommerceOverviewDashboard;

pub mod d410_ecommerce_overview;

pub use d410_ecommerce_overview::ui::EcommerceOverviewDashboard;

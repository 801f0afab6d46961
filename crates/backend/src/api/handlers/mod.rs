// Projection handlers
pub mod p910_ecommerce_sales;

// Dashboard handlers
pub mod d410_ecommerce_overview;

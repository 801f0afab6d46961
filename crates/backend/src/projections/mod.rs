pub mod p910_ecommerce_sales;

pub mod aggregations;
pub mod service;

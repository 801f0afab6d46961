pub mod dashboards;
pub mod projections;

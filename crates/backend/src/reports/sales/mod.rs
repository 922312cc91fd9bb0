pub mod memory_store;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;
pub mod store;

pub use service::SalesReportService;
pub use store::{DataAccessError, SalesStore};

pub mod dto;
pub mod routes;

pub use dto::*;

//! Wire types shared by the sales report server and its browser client.

pub mod reports;
pub mod shared;

pub mod api;
pub mod report_state;
pub mod sales_by_customer;
pub mod sales_by_region;

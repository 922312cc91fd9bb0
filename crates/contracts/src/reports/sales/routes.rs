//! Route templates of the sales report API
//!
//! The server mounts the templates, the client fills them with a filter key.
//! Filling does not percent-encode; the caller encodes the key first.

/// Namespace of every sales report route
pub const SALES_REPORTS_BASE: &str = "/api/reports/sales";

/// Relative to [`SALES_REPORTS_BASE`]
pub const REGIONS: &str = "/regions";
pub const REGION: &str = "/regions/:region";
pub const CUSTOMER: &str = "/customer/:customer";

pub fn regions_url() -> String {
    format!("{}{}", SALES_REPORTS_BASE, REGIONS)
}

pub fn region_url(encoded_region: &str) -> String {
    format!("{}/regions/{}", SALES_REPORTS_BASE, encoded_region)
}

pub fn customer_url(encoded_customer: &str) -> String {
    format!("{}/customer/{}", SALES_REPORTS_BASE, encoded_customer)
}

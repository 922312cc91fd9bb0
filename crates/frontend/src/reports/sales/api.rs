use contracts::reports::sales::{routes, RegionAggregate, SalesRecord};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// GET `url` and decode a JSON body; any non-2xx status is an error
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Server returned {} {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub fn region_request_url(region: &str) -> String {
    routes::region_url(&urlencoding::encode(region))
}

pub fn customer_request_url(customer: &str) -> String {
    routes::customer_url(&urlencoding::encode(customer))
}

/// Distinct regions
pub async fn fetch_regions() -> Result<Vec<String>, String> {
    get_json(&routes::regions_url()).await
}

/// Total sales per salesperson in `region`
pub async fn fetch_sales_by_region(region: &str) -> Result<Vec<RegionAggregate>, String> {
    get_json(&region_request_url(region)).await
}

/// Sales of one customer
pub async fn fetch_sales_by_customer(customer: &str) -> Result<Vec<SalesRecord>, String> {
    get_json(&customer_request_url(customer)).await
}

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use contracts::reports::sales::{routes, RegionAggregate, SalesRecord};

use crate::api::error::{not_found, ReportError};
use crate::reports::sales::SalesReportService;

pub const REGIONS_ERROR: &str = "Error fetching sales regions";
pub const REGION_ERROR: &str = "Error fetching sales data by region";
pub const CUSTOMER_ERROR: &str = "Error fetching sales data";

/// Routes of the sales report namespace, relative to `SALES_REPORTS_BASE`
///
/// Every path or method under the namespace that matches none of the routes
/// gets the uniform 404 body without touching the store.
pub fn router(service: SalesReportService) -> Router {
    Router::new()
        .route(routes::REGIONS, get(list_regions))
        .route(routes::REGION, get(sales_by_region))
        .route(routes::CUSTOMER, get(sales_by_customer))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(service)
}

/// GET /api/reports/sales/regions
pub async fn list_regions(
    State(service): State<SalesReportService>,
) -> Result<Json<Vec<String>>, ReportError> {
    let regions = service
        .list_distinct_regions()
        .await
        .map_err(|e| ReportError::new(REGIONS_ERROR, e))?;

    tracing::info!("Sales report: returning {} regions", regions.len());
    Ok(Json(regions))
}

/// GET /api/reports/sales/regions/:region
pub async fn sales_by_region(
    State(service): State<SalesReportService>,
    Path(region): Path<String>,
) -> Result<Json<Vec<RegionAggregate>>, ReportError> {
    let aggregates = service
        .aggregate_by_region(&region)
        .await
        .map_err(|e| ReportError::new(REGION_ERROR, e))?;

    tracing::info!(
        "Sales report: region '{}' has {} salespeople",
        region,
        aggregates.len()
    );
    Ok(Json(aggregates))
}

/// GET /api/reports/sales/customer/:customer
pub async fn sales_by_customer(
    State(service): State<SalesReportService>,
    Path(customer): Path<String>,
) -> Result<Json<Vec<SalesRecord>>, ReportError> {
    let records = service
        .find_by_customer(&customer)
        .await
        .map_err(|e| ReportError::new(CUSTOMER_ERROR, e))?;

    tracing::info!(
        "Sales report: customer '{}' has {} sales",
        customer,
        records.len()
    );
    Ok(Json(records))
}

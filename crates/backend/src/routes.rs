use axum::{routing::get, Router};
use contracts::reports::sales::routes::SALES_REPORTS_BASE;

use crate::api::handlers::reports_sales;
use crate::reports::sales::SalesReportService;

/// Конфигурация всех роутов API
///
/// Статика (`dist`), логгер запросов и CORS навешиваются в `main`.
pub fn configure_routes(sales: SalesReportService) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // REPORTS
        // ========================================
        .nest(SALES_REPORTS_BASE, reports_sales::router(sales))
}

pub mod reports_sales;

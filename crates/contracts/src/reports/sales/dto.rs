use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sale of the `sales` collection
///
/// Only `amount` is mandatory on the wire. Text fields are free-form and
/// decode to an empty string when a document omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub date: DateTime<Utc>,

    // Dimensions
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub salesperson: String,
    #[serde(default)]
    pub channel: String,

    // Sum
    pub amount: f64,
}

/// Total sales of one salesperson inside a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionAggregate {
    pub salesperson: String,
    pub total_sales: f64,
}

impl RegionAggregate {
    pub fn new(salesperson: impl Into<String>, total_sales: f64) -> Self {
        Self {
            salesperson: salesperson.into(),
            total_sales,
        }
    }
}

use contracts::reports::sales::{RegionAggregate, SalesRecord};
use std::sync::Arc;

use super::query;
use super::store::{DataAccessError, SalesStore};

/// Sales report queries over an injected store
///
/// An empty `Ok` and an `Err` are different outcomes and stay different:
/// nothing here turns a store failure into an empty list.
#[derive(Clone)]
pub struct SalesReportService {
    store: Arc<dyn SalesStore>,
}

impl SalesReportService {
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store }
    }

    /// Distinct regions in store order, duplicates collapsed
    pub async fn list_distinct_regions(&self) -> Result<Vec<String>, DataAccessError> {
        let values = self.store.distinct(query::distinct_regions()).await?;

        let mut regions: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !regions.contains(&value) {
                regions.push(value);
            }
        }
        Ok(regions)
    }

    /// Total sales per salesperson within `region`
    pub async fn aggregate_by_region(
        &self,
        region: &str,
    ) -> Result<Vec<RegionAggregate>, DataAccessError> {
        let groups = self.store.aggregate(&query::sales_by_region(region)).await?;

        Ok(groups
            .into_iter()
            .map(|g| RegionAggregate::new(g.key, g.total))
            .collect())
    }

    /// Sales whose customer equals `customer` exactly
    pub async fn find_by_customer(
        &self,
        customer: &str,
    ) -> Result<Vec<SalesRecord>, DataAccessError> {
        self.store.find(&query::sales_by_customer(customer)).await
    }
}

//! Demo data for an empty store

use chrono::{TimeZone, Utc};
use contracts::reports::sales::SalesRecord;
use uuid::Uuid;

use super::memory_store::InMemorySalesStore;
use super::repository::SqliteSalesStore;
use super::store::DataAccessError;

// (date, region, product, category, customer, salesperson, channel, amount)
type DemoRow = (
    (i32, u32, u32),
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
);

const DEMO_ROWS: &[DemoRow] = &[
    ((2023, 10, 1), "North", "Laptop Pro", "Electronics", "Alpha Inc", "John Doe", "Online", 1200.0),
    ((2023, 10, 2), "South", "Smartphone X", "Electronics", "Beta LLC", "Jane Smith", "Retail", 800.0),
    ((2023, 10, 3), "East", "Office Chair", "Furniture", "Gamma Co", "Mike Brown", "Online", 150.0),
    ((2023, 10, 4), "West", "Desk Lamp", "Furniture", "Delta Ltd", "Emily Davis", "Retail", 45.0),
    ((2023, 10, 5), "North", "Tablet S", "Electronics", "Lambda LLC", "Jane Smith", "In-store", 150.0),
    ((2023, 10, 6), "North", "Monitor 27", "Electronics", "Chi Co", "John Doe", "Online", 300.0),
    ((2023, 10, 7), "South", "Standing Desk", "Furniture", "Lambda LLC", "Mike Brown", "Online", 650.0),
    ((2023, 10, 8), "East", "Headphones", "Electronics", "Alpha Inc", "Emily Davis", "Retail", 120.0),
    ((2023, 10, 9), "West", "Printer", "Office Supplies", "Beta LLC", "John Doe", "Partner", 230.0),
    ((2023, 10, 10), "North", "Laptop Pro", "Electronics", "Omega Corp", "Jane Smith", "Online", 1350.0),
];

pub fn demo_records() -> Vec<SalesRecord> {
    DEMO_ROWS
        .iter()
        .filter_map(
            |&((year, month, day), region, product, category, customer, salesperson, channel, amount)| {
                let date = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()?;
                Some(SalesRecord {
                    id: Uuid::new_v4().simple().to_string(),
                    date,
                    region: region.to_string(),
                    product: product.to_string(),
                    category: category.to_string(),
                    customer: customer.to_string(),
                    salesperson: salesperson.to_string(),
                    channel: channel.to_string(),
                    amount,
                })
            },
        )
        .collect()
}

pub async fn seed_sqlite_if_empty(store: &SqliteSalesStore) -> Result<usize, DataAccessError> {
    if store.count().await? > 0 {
        tracing::info!("Sales table already has data, skipping demo seed");
        return Ok(0);
    }
    let inserted = store.insert_many(demo_records()).await?;
    tracing::info!("Seeded {} demo sales records", inserted);
    Ok(inserted)
}

pub fn seed_memory_if_empty(store: &InMemorySalesStore) -> Result<usize, DataAccessError> {
    if store.count()? > 0 {
        return Ok(0);
    }
    let inserted = store.insert_many(demo_records())?;
    tracing::info!("Seeded {} demo sales records (memory)", inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    #[test]
    fn test_demo_records_are_valid() {
        let records = demo_records();
        assert_eq!(records.len(), DEMO_ROWS.len());
        assert!(records.iter().all(|r| r.amount >= 0.0));
        assert!(records.iter().all(|r| r.id.len() == 32));
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let store = SqliteSalesStore::new(db::connect_in_memory().await.unwrap());
        assert_eq!(seed_sqlite_if_empty(&store).await.unwrap(), DEMO_ROWS.len());
        assert_eq!(seed_sqlite_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), DEMO_ROWS.len() as u64);
    }

    #[test]
    fn test_memory_seed_runs_once() {
        let store = InMemorySalesStore::new();
        assert_eq!(seed_memory_if_empty(&store).unwrap(), DEMO_ROWS.len());
        assert_eq!(seed_memory_if_empty(&store).unwrap(), 0);
    }
}

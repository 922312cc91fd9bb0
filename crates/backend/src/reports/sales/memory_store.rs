//! In-memory `sales` collection
//!
//! Used when `database.storage = "memory"` and as the store double in tests.

use async_trait::async_trait;
use contracts::reports::sales::SalesRecord;
use std::sync::{Arc, RwLock};

use super::query::{ExactMatch, GroupOrder, GroupSum, GroupTotal, SalesField};
use super::store::{DataAccessError, SalesStore};

#[derive(Clone, Default)]
pub struct InMemorySalesStore {
    records: Arc<RwLock<Vec<SalesRecord>>>,
}

impl InMemorySalesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<SalesRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub fn insert_many(&self, records: Vec<SalesRecord>) -> Result<usize, DataAccessError> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| DataAccessError::Connection(format!("Failed to acquire write lock: {}", e)))?;
        let count = records.len();
        guard.extend(records);
        Ok(count)
    }

    pub fn count(&self) -> Result<usize, DataAccessError> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<SalesRecord>>, DataAccessError> {
        self.records
            .read()
            .map_err(|e| DataAccessError::Connection(format!("Failed to acquire read lock: {}", e)))
    }
}

#[async_trait]
impl SalesStore for InMemorySalesStore {
    async fn find(&self, filter: &ExactMatch) -> Result<Vec<SalesRecord>, DataAccessError> {
        let records = self.read()?;
        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn distinct(&self, field: SalesField) -> Result<Vec<String>, DataAccessError> {
        let records = self.read()?;
        let mut values: Vec<String> = Vec::new();
        for record in records.iter() {
            let value = field.value_of(record);
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }

    async fn aggregate(&self, pipeline: &GroupSum) -> Result<Vec<GroupTotal>, DataAccessError> {
        let records = self.read()?;

        // Groups keep first-seen order until sorted
        let mut groups: Vec<GroupTotal> = Vec::new();
        for record in records.iter().filter(|r| pipeline.filter.matches(r)) {
            let key = pipeline.group_by.value_of(record);
            match groups.iter_mut().find(|g| g.key == key) {
                Some(group) => group.total += record.amount,
                None => groups.push(GroupTotal {
                    key: key.to_string(),
                    total: record.amount,
                }),
            }
        }

        if pipeline.order == GroupOrder::KeyAscending {
            groups.sort_by(|a, b| a.key.cmp(&b.key));
        }

        Ok(groups)
    }
}

use async_trait::async_trait;
use contracts::reports::sales::SalesRecord;
use contracts::shared::error::ErrorCause;
use thiserror::Error;

use super::query::{ExactMatch, GroupSum, GroupTotal, SalesField};

/// Ошибки доступа к хранилищу продаж
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataAccessError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("malformed sales record {id}: {reason}")]
    Decode { id: String, reason: String },
}

impl DataAccessError {
    pub fn kind(&self) -> &'static str {
        match self {
            DataAccessError::Connection(_) => "connection",
            DataAccessError::Query(_) => "query",
            DataAccessError::Decode { .. } => "decode",
        }
    }

    /// Cause object sent back to the client in a 500 body
    pub fn to_cause(&self) -> ErrorCause {
        ErrorCause {
            kind: self.kind().to_string(),
            detail: self.to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for DataAccessError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(e) => DataAccessError::Connection(e.to_string()),
            other => DataAccessError::Query(other.to_string()),
        }
    }
}

/// Read access to the `sales` collection
///
/// Implementations borrow a connection for the duration of one call and
/// release it before returning, whatever the outcome.
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Documents matching `filter`, in store order
    async fn find(&self, filter: &ExactMatch) -> Result<Vec<SalesRecord>, DataAccessError>;

    /// Distinct values of `field`
    async fn distinct(&self, field: SalesField) -> Result<Vec<String>, DataAccessError>;

    /// Sum of `amount` per group
    async fn aggregate(&self, pipeline: &GroupSum) -> Result<Vec<GroupTotal>, DataAccessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_carries_kind_and_detail() {
        let cause = DataAccessError::Connection("pool timed out".to_string()).to_cause();
        assert_eq!(cause.kind, "connection");
        assert_eq!(cause.detail, "connection error: pool timed out");
    }

    #[test]
    fn test_db_err_maps_to_query() {
        let err: DataAccessError = sea_orm::DbErr::Custom("no such table: sales".into()).into();
        assert_eq!(err.kind(), "query");
    }
}

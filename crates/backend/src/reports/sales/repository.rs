use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use contracts::reports::sales::SalesRecord;
use sea_orm::entity::prelude::*;
use sea_orm::{
    DatabaseBackend, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    Statement,
};
use serde::{Deserialize, Serialize};

use super::query::{ExactMatch, GroupOrder, GroupSum, GroupTotal, SalesField};
use super::store::{DataAccessError, SalesStore};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// RFC 3339, UTC
    pub date: String,

    // Dimensions
    pub region: String,
    pub product: String,
    pub category: String,
    pub customer: String,
    pub salesperson: String,
    pub channel: String,

    // Sum
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn column(field: SalesField) -> Column {
    match field {
        SalesField::Region => Column::Region,
        SalesField::Product => Column::Product,
        SalesField::Category => Column::Category,
        SalesField::Customer => Column::Customer,
        SalesField::Salesperson => Column::Salesperson,
        SalesField::Channel => Column::Channel,
    }
}

fn into_record(model: Model) -> Result<SalesRecord, DataAccessError> {
    let date = DateTime::parse_from_rfc3339(&model.date)
        .map_err(|e| DataAccessError::Decode {
            id: model.id.clone(),
            reason: format!("bad date '{}': {}", model.date, e),
        })?
        .with_timezone(&Utc);

    Ok(SalesRecord {
        id: model.id,
        date,
        region: model.region,
        product: model.product,
        category: model.category,
        customer: model.customer,
        salesperson: model.salesperson,
        channel: model.channel,
        amount: model.amount,
    })
}

fn into_active(record: SalesRecord) -> ActiveModel {
    ActiveModel {
        id: Set(record.id),
        date: Set(record.date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        region: Set(record.region),
        product: Set(record.product),
        category: Set(record.category),
        customer: Set(record.customer),
        salesperson: Set(record.salesperson),
        channel: Set(record.channel),
        amount: Set(record.amount),
    }
}

/// `sales` table in SQLite, accessed through sea-orm's connection pool
#[derive(Clone)]
pub struct SqliteSalesStore {
    db: DatabaseConnection,
}

impl SqliteSalesStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count(&self) -> Result<u64, DataAccessError> {
        Ok(Entity::find().count(&self.db).await?)
    }

    pub async fn insert_many(&self, records: Vec<SalesRecord>) -> Result<usize, DataAccessError> {
        if records.is_empty() {
            return Ok(0);
        }
        let count = records.len();
        let actives: Vec<ActiveModel> = records.into_iter().map(into_active).collect();
        Entity::insert_many(actives)
            .exec_without_returning(&self.db)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl SalesStore for SqliteSalesStore {
    async fn find(&self, filter: &ExactMatch) -> Result<Vec<SalesRecord>, DataAccessError> {
        let models = Entity::find()
            .filter(column(filter.field).eq(filter.value.as_str()))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(into_record).collect()
    }

    async fn distinct(&self, field: SalesField) -> Result<Vec<String>, DataAccessError> {
        let values: Vec<String> = Entity::find()
            .select_only()
            .column(column(field))
            .distinct()
            .order_by_asc(column(field))
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(values)
    }

    async fn aggregate(&self, pipeline: &GroupSum) -> Result<Vec<GroupTotal>, DataAccessError> {
        #[derive(Debug, FromQueryResult)]
        struct GroupRow {
            group_key: String,
            total_sales: f64,
        }

        // Column names come from SalesField, never from user input
        let group_column = pipeline.group_by.column_name();
        let mut sql = format!(
            "SELECT {group} AS group_key, CAST(SUM(amount) AS REAL) AS total_sales \
             FROM sales WHERE {filter} = ? GROUP BY {group}",
            group = group_column,
            filter = pipeline.filter.field.column_name(),
        );
        if pipeline.order == GroupOrder::KeyAscending {
            sql.push_str(&format!(" ORDER BY {} ASC", group_column));
        }

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            [pipeline.filter.value.clone().into()],
        );
        let rows = GroupRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|r| GroupTotal {
                key: r.group_key,
                total: r.total_sales,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::sales::query;
    use crate::shared::data::db;
    use sea_orm::ConnectionTrait;

    fn sale(
        id: &str,
        date: &str,
        region: &str,
        customer: &str,
        salesperson: &str,
        amount: f64,
    ) -> SalesRecord {
        SalesRecord {
            id: id.to_string(),
            date: date.parse().unwrap(),
            region: region.to_string(),
            product: "Laptop".to_string(),
            category: "Electronics".to_string(),
            customer: customer.to_string(),
            salesperson: salesperson.to_string(),
            channel: "Online".to_string(),
            amount,
        }
    }

    async fn seeded_store() -> SqliteSalesStore {
        let conn = db::connect_in_memory().await.unwrap();
        let store = SqliteSalesStore::new(conn);
        store
            .insert_many(vec![
                sale("a", "2023-10-03T00:00:00Z", "North", "Lambda LLC", "John Doe", 100.0),
                sale("b", "2023-10-01T00:00:00Z", "North", "Lambda LLC", "John Doe", 900.0),
                sale("c", "2023-10-02T00:00:00Z", "North", "Chi Co", "Jane Smith", 1500.0),
                sale("d", "2023-10-02T00:00:00Z", "South", "Chi Co", "Jane Smith", 300.0),
            ])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_find_by_customer_orders_by_date() {
        let store = seeded_store().await;
        let found = store.find(&query::sales_by_customer("Lambda LLC")).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(found[0].date, "2023-10-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[tokio::test]
    async fn test_find_unknown_customer_is_empty() {
        let store = seeded_store().await;
        let found = store.find(&query::sales_by_customer("Nonexistent Customer")).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_distinct_regions() {
        let store = seeded_store().await;
        let regions = store.distinct(SalesField::Region).await.unwrap();
        assert_eq!(regions, vec!["North", "South"]);
    }

    #[tokio::test]
    async fn test_aggregate_by_region() {
        let store = seeded_store().await;
        let groups = store.aggregate(&query::sales_by_region("North")).await.unwrap();
        assert_eq!(
            groups,
            vec![
                GroupTotal { key: "Jane Smith".to_string(), total: 1500.0 },
                GroupTotal { key: "John Doe".to_string(), total: 1000.0 },
            ]
        );

        let empty = store.aggregate(&query::sales_by_region("north")).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_missing_table_is_an_error() {
        let conn = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        let store = SqliteSalesStore::new(conn);
        let result = store.find(&query::sales_by_customer("Lambda LLC")).await;
        assert!(matches!(result, Err(DataAccessError::Query(_))));
    }

    #[tokio::test]
    async fn test_bad_date_is_decode_error() {
        let store = seeded_store().await;
        store
            .db
            .execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                "INSERT INTO sales (id, date, region, product, category, customer, salesperson, channel, amount) \
                 VALUES ('x', 'yesterday', 'West', 'Pen', 'Office', 'Omega', 'Bo', 'Retail', 5.0)"
                    .to_string(),
            ))
            .await
            .unwrap();

        let result = store.find(&query::sales_by_customer("Omega")).await;
        assert!(matches!(result, Err(DataAccessError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_count_after_insert() {
        let store = seeded_store().await;
        assert_eq!(store.count().await.unwrap(), 4);
        assert_eq!(store.insert_many(Vec::new()).await.unwrap(), 0);
    }
}

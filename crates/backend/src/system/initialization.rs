use anyhow::{Context, Result};
use std::sync::Arc;

use crate::reports::sales::memory_store::InMemorySalesStore;
use crate::reports::sales::repository::SqliteSalesStore;
use crate::reports::sales::{seed, SalesReportService, SalesStore};
use crate::shared::config::{self, Config, StorageKind};
use crate::shared::data::db;

/// Открыть хранилище продаж согласно `[database]` и собрать сервис отчетов
///
/// Ошибка открытия здесь фатальна: сервер не стартует без хранилища.
pub async fn build_sales_service(config: &Config) -> Result<SalesReportService> {
    let store: Arc<dyn SalesStore> = match config.database.storage {
        StorageKind::Sqlite => {
            let db_path = config::get_database_path(config)?;
            let conn = db::initialize_database(&db_path)
                .await
                .with_context(|| format!("db init failed for {}", db_path.display()))?;
            let store = SqliteSalesStore::new(conn);
            if config.database.seed_demo_data {
                seed::seed_sqlite_if_empty(&store)
                    .await
                    .context("demo seed failed")?;
            }
            Arc::new(store)
        }
        StorageKind::Memory => {
            tracing::info!("Using in-memory sales store");
            let store = InMemorySalesStore::new();
            if config.database.seed_demo_data {
                seed::seed_memory_if_empty(&store).context("demo seed failed")?;
            }
            Arc::new(store)
        }
    };

    Ok(SalesReportService::new(store))
}

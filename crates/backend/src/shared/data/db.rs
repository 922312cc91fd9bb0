use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

/// Bootstrap of the `sales` table, idempotent
const SALES_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sales (
        id TEXT PRIMARY KEY NOT NULL,
        date TEXT NOT NULL,
        region TEXT NOT NULL DEFAULT '',
        product TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        customer TEXT NOT NULL DEFAULT '',
        salesperson TEXT NOT NULL DEFAULT '',
        channel TEXT NOT NULL DEFAULT '',
        amount REAL NOT NULL CHECK (amount >= 0)
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_sales_region ON sales (region);",
    "CREATE INDEX IF NOT EXISTS idx_sales_customer ON sales (customer);",
];

pub fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open the SQLite file at `db_path` (created if missing) and bootstrap the schema
pub async fn initialize_database(db_path: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };

    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database, single connection so every query sees the same data
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;

    ensure_schema(&conn).await?;
    Ok(conn)
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in SALES_SCHEMA {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    tracing::debug!("sales schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sqlite_url() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/data/sales.db")),
            "sqlite:///var/data/sales.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\sales.db")),
            "sqlite:///C:/data/sales.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_schema_bootstrap_is_idempotent() {
        let conn = connect_in_memory().await.unwrap();
        ensure_schema(&conn).await.unwrap();
    }
}

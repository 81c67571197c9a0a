//! SQLite introspector
//!
//! The one in-tree dialect adapter, built over a `sqlx` pool. SQLite has no
//! catalog or schema levels, so the catalog/database/schema qualifiers are
//! accepted and ignored; attached databases stand in for the database list.

use crate::db::introspect::DbIntrospector;
use crate::db::result::DbToolResult;
use async_trait::async_trait;
use serde_json::{json, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};

/// Introspection over one SQLite connection pool
pub struct SqliteIntrospector {
    pool: SqlitePool,
}

impl SqliteIntrospector {
    /// Wrap an already-connected pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Quote an identifier for interpolation into PRAGMA statements,
    /// which cannot take bound parameters.
    fn quote_ident(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}

/// Convert one dynamically-typed row to a JSON object keyed by column name.
fn row_to_json(row: &SqliteRow) -> Value {
    let mut record = serde_json::Map::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value = match row.try_get_raw(index) {
            Ok(raw) if raw.is_null() => Value::Null,
            Ok(raw) => match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => row
                    .try_get::<i64, _>(index)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "REAL" => row
                    .try_get::<f64, _>(index)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "BLOB" => row
                    .try_get::<Vec<u8>, _>(index)
                    .map(|bytes| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
                    .unwrap_or(Value::Null),
                _ => row
                    .try_get::<String, _>(index)
                    .map(Value::String)
                    .unwrap_or(Value::Null),
            },
            Err(_) => Value::Null,
        };
        record.insert(column.name().to_string(), value);
    }
    Value::Object(record)
}

#[async_trait]
impl DbIntrospector for SqliteIntrospector {
    async fn list_databases(&self, _catalog: Option<String>, include_sys: bool) -> DbToolResult {
        match sqlx::query("PRAGMA database_list").fetch_all(&self.pool).await {
            Ok(rows) => {
                let databases = rows
                    .iter()
                    .filter_map(|row| {
                        let name: String = row.try_get("name").ok()?;
                        if !include_sys && name == "temp" {
                            return None;
                        }
                        let file: Option<String> = row.try_get("file").ok();
                        Some(json!({"database_name": name, "file": file}))
                    })
                    .collect();
                DbToolResult::ok(databases)
            }
            Err(e) => DbToolResult::failed(e.to_string()),
        }
    }

    async fn list_schemas(
        &self,
        _catalog: Option<String>,
        _database: Option<String>,
        include_sys: bool,
    ) -> DbToolResult {
        // SQLite has no schema level; the set is fixed to main (plus the
        // temp schema when system entries are requested).
        let mut schemas = vec![json!({"schema_name": "main"})];
        if include_sys {
            schemas.push(json!({"schema_name": "temp"}));
        }
        DbToolResult::ok(schemas)
    }

    async fn list_tables(
        &self,
        _catalog: Option<String>,
        _database: Option<String>,
        _schema: Option<String>,
        include_views: bool,
    ) -> DbToolResult {
        let sql = if include_views {
            "SELECT name, type FROM sqlite_master \
             WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' ORDER BY name"
        } else {
            "SELECT name, type FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
        };
        match sqlx::query(sql).fetch_all(&self.pool).await {
            Ok(rows) => DbToolResult::ok(rows.iter().map(row_to_json).collect()),
            Err(e) => DbToolResult::failed(e.to_string()),
        }
    }

    async fn describe_table(
        &self,
        table: String,
        _catalog: Option<String>,
        _database: Option<String>,
        _schema: Option<String>,
        _table_type: String,
    ) -> DbToolResult {
        let sql = format!("PRAGMA table_info({})", Self::quote_ident(&table));
        match sqlx::query(&sql).fetch_all(&self.pool).await {
            Ok(rows) if rows.is_empty() => {
                DbToolResult::failed(format!("Table '{table}' not found"))
            }
            Ok(rows) => DbToolResult::ok(rows.iter().map(row_to_json).collect()),
            Err(e) => DbToolResult::failed(e.to_string()),
        }
    }

    async fn read_query(&self, sql: String) -> DbToolResult {
        match sqlx::query(&sql).fetch_all(&self.pool).await {
            Ok(rows) => DbToolResult::ok(rows.iter().map(row_to_json).collect()),
            Err(e) => DbToolResult::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn fixture() -> SqliteIntrospector {
        // One connection: every new in-memory connection is a fresh database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE orders (id INTEGER PRIMARY KEY, customer TEXT NOT NULL, total REAL)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("CREATE VIEW big_orders AS SELECT * FROM orders WHERE total > 100")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO orders (customer, total) VALUES ('acme', 250.0), ('zenith', 40.0)")
            .execute(&pool)
            .await
            .unwrap();
        SqliteIntrospector::new(pool)
    }

    #[tokio::test]
    async fn test_list_databases_reports_main() {
        let introspector = fixture().await;
        let result = introspector.list_databases(None, false).await;
        assert!(result.success);
        let rows = result.rows.unwrap();
        assert!(rows
            .iter()
            .any(|row| row["database_name"] == "main"));
    }

    #[tokio::test]
    async fn test_list_schemas_is_static() {
        let introspector = fixture().await;
        let result = introspector.list_schemas(None, None, false).await;
        assert_eq!(result.row_count(), 1);
        let result = introspector.list_schemas(None, None, true).await;
        assert_eq!(result.row_count(), 2);
    }

    #[tokio::test]
    async fn test_list_tables_with_and_without_views() {
        let introspector = fixture().await;

        let with_views = introspector.list_tables(None, None, None, true).await;
        assert_eq!(with_views.row_count(), 2);

        let tables_only = introspector.list_tables(None, None, None, false).await;
        let rows = tables_only.rows.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "orders");
        assert_eq!(rows[0]["type"], "table");
    }

    #[tokio::test]
    async fn test_describe_table() {
        let introspector = fixture().await;
        let result = introspector
            .describe_table("orders".to_string(), None, None, None, "table".to_string())
            .await;
        assert!(result.success);
        let rows = result.rows.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["name"], "id");
        assert_eq!(rows[1]["name"], "customer");
        assert_eq!(rows[1]["type"], "TEXT");
    }

    #[tokio::test]
    async fn test_describe_missing_table_fails_in_wrapper() {
        let introspector = fixture().await;
        let result = introspector
            .describe_table("ghosts".to_string(), None, None, None, "table".to_string())
            .await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("ghosts"));
    }

    #[tokio::test]
    async fn test_read_query_rows() {
        let introspector = fixture().await;
        let result = introspector
            .read_query("SELECT customer, total FROM orders ORDER BY total DESC".to_string())
            .await;
        assert!(result.success);
        let rows = result.rows.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["customer"], "acme");
        assert_eq!(rows[0]["total"], 250.0);
    }

    #[tokio::test]
    async fn test_read_query_error_rides_the_wrapper() {
        let introspector = fixture().await;
        let result = introspector
            .read_query("SELECT * FROM no_such_table".to_string())
            .await;
        assert!(!result.success);
        assert!(result.error.is_some());
    }

    #[test]
    fn test_quote_ident_escapes_quotes() {
        assert_eq!(SqliteIntrospector::quote_ident("plain"), "\"plain\"");
        assert_eq!(
            SqliteIntrospector::quote_ident("we\"ird"),
            "\"we\"\"ird\""
        );
    }
}

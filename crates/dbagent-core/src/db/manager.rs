//! Connection management
//!
//! The manager owns live connection handles keyed by `(namespace, database)`
//! and hands out dialect-specific introspectors built over them. Tools never
//! open or close connections themselves; a handle resolved here stays pooled
//! for the manager's lifetime.

use crate::config::model::{DatabaseConfig, NamespaceConfig};
use crate::db::dialect::DbDialect;
use crate::db::introspect::DbIntrospector;
use crate::db::sqlite::SqliteIntrospector;
use crate::error::{AgentError, AgentResult};
use parking_lot::RwLock;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A live connection handle, one variant per in-tree driver
#[derive(Debug, Clone)]
pub enum DbConnection {
    /// SQLite pool (sqlx)
    Sqlite(SqlitePool),
}

/// Pools connection handles for the configured namespaces
pub struct ConnectionManager {
    namespaces: HashMap<String, NamespaceConfig>,
    pool: RwLock<HashMap<(String, String), DbConnection>>,
}

impl ConnectionManager {
    /// Create a manager over a namespace set
    pub fn new(namespaces: HashMap<String, NamespaceConfig>) -> Self {
        Self {
            namespaces,
            pool: RwLock::new(HashMap::new()),
        }
    }

    fn database_config(
        &self,
        namespace: &str,
        database: &str,
    ) -> AgentResult<(DbDialect, DatabaseConfig)> {
        let ns = self.namespaces.get(namespace).ok_or_else(|| {
            AgentError::connection(format!("Unknown namespace '{namespace}'"))
        })?;
        let db = ns.databases.get(database).ok_or_else(|| {
            AgentError::connection(format!(
                "Unknown database '{database}' in namespace '{namespace}'"
            ))
        })?;
        Ok((ns.dialect, db.clone()))
    }

    /// Resolve (or reuse) the connection handle for `(namespace, database)`.
    pub async fn get_conn(&self, namespace: &str, database: &str) -> AgentResult<DbConnection> {
        let key = (namespace.to_string(), database.to_string());
        if let Some(conn) = self.pool.read().get(&key) {
            return Ok(conn.clone());
        }

        let (dialect, db) = self.database_config(namespace, database)?;
        let conn = match dialect {
            DbDialect::Sqlite => {
                debug!(namespace, database, url = %db.url, "opening sqlite pool");
                let mut options = SqlitePoolOptions::new();
                // An in-memory database exists per connection; a larger pool
                // would hand out fresh empty databases.
                if db.url.contains(":memory:") || db.url.contains("mode=memory") {
                    options = options.max_connections(1);
                }
                let pool = options
                    .connect(&db.url)
                    .await
                    .map_err(|e| {
                        AgentError::connection(format!(
                            "Failed to connect to '{}': {}",
                            db.url, e
                        ))
                    })?;
                DbConnection::Sqlite(pool)
            }
            other => {
                return Err(AgentError::connection(format!(
                    "No in-tree driver for dialect '{other}'"
                )))
            }
        };

        // A racing resolver may have inserted first; keep whichever landed.
        self.pool
            .write()
            .entry(key)
            .or_insert_with(|| conn.clone());
        Ok(conn)
    }

    /// Build the dialect's introspector over the resolved connection.
    pub async fn introspector(
        &self,
        namespace: &str,
        database: &str,
    ) -> AgentResult<Arc<dyn DbIntrospector>> {
        match self.get_conn(namespace, database).await? {
            DbConnection::Sqlite(pool) => Ok(Arc::new(SqliteIntrospector::new(pool))),
        }
    }
}

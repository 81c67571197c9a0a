//! The introspection seam
//!
//! `DbIntrospector` is the capability set the tool adapters delegate to:
//! one implementation per dialect, each operation reporting through the
//! uniform [`DbToolResult`] wrapper. Connection handling stays outside;
//! an introspector is built over an already-resolved connection handle.

use crate::db::result::DbToolResult;
use async_trait::async_trait;

/// Database introspection and read-only query operations
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DbIntrospector: Send + Sync {
    /// List databases, optionally scoped to a catalog
    async fn list_databases(&self, catalog: Option<String>, include_sys: bool) -> DbToolResult;

    /// List schemas for a catalog/database
    async fn list_schemas(
        &self,
        catalog: Option<String>,
        database: Option<String>,
        include_sys: bool,
    ) -> DbToolResult;

    /// List tables (and optionally views) for a catalog/database/schema
    async fn list_tables(
        &self,
        catalog: Option<String>,
        database: Option<String>,
        schema: Option<String>,
        include_views: bool,
    ) -> DbToolResult;

    /// Describe one table's structure
    async fn describe_table(
        &self,
        table: String,
        catalog: Option<String>,
        database: Option<String>,
        schema: Option<String>,
        table_type: String,
    ) -> DbToolResult;

    /// Run a read-only SQL statement and return its result set
    async fn read_query(&self, sql: String) -> DbToolResult;
}

impl std::fmt::Debug for dyn DbIntrospector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbIntrospector").finish_non_exhaustive()
    }
}

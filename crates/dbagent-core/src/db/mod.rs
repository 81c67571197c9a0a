//! Database seam: dialects, the uniform result wrapper, the introspection
//! trait, connection management, and the in-tree SQLite adapter.

pub mod dialect;
pub mod introspect;
pub mod manager;
pub mod result;
pub mod sqlite;

pub use dialect::DbDialect;
pub use introspect::DbIntrospector;
pub use manager::{ConnectionManager, DbConnection};
pub use result::DbToolResult;
pub use sqlite::SqliteIntrospector;

#[cfg(any(test, feature = "mock"))]
pub use introspect::MockDbIntrospector;

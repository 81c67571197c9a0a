//! Database dialect identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine/query-language family a connection speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbDialect {
    /// Embedded single-file engine
    Sqlite,
    /// Embedded analytical engine
    DuckDb,
    /// MySQL and compatible servers
    Mysql,
    /// PostgreSQL
    Postgres,
    /// StarRocks (MySQL wire protocol)
    StarRocks,
}

impl DbDialect {
    /// Whether the engine has a catalog/database level above schemas.
    ///
    /// The embedded engines expose exactly one database per connection, so
    /// listing databases is not a meaningful operation for them.
    pub fn supports_multiple_databases(&self) -> bool {
        !matches!(self, Self::Sqlite | Self::DuckDb)
    }

    /// Canonical lowercase name, matching the config file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::DuckDb => "duckdb",
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::StarRocks => "starrocks",
        }
    }
}

impl fmt::Display for DbDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_engines_are_single_database() {
        assert!(!DbDialect::Sqlite.supports_multiple_databases());
        assert!(!DbDialect::DuckDb.supports_multiple_databases());
        assert!(DbDialect::Mysql.supports_multiple_databases());
        assert!(DbDialect::Postgres.supports_multiple_databases());
        assert!(DbDialect::StarRocks.supports_multiple_databases());
    }

    #[test]
    fn test_serde_roundtrip_lowercase() {
        let json = serde_json::to_string(&DbDialect::StarRocks).unwrap();
        assert_eq!(json, "\"starrocks\"");
        let back: DbDialect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DbDialect::StarRocks);
    }
}

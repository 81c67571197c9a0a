//! Uniform result wrapper for database operations
//!
//! Every introspection and query operation reports through this shape:
//! a success flag plus either a sequence of records or an error message.
//! Tool adapters pass the wrapper through unchanged, so failures surface
//! to the host exactly as the introspector reports them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one database operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbToolResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Result records (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Value>>,
    /// Error description (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DbToolResult {
    /// Successful result carrying records
    pub fn ok(rows: Vec<Value>) -> Self {
        Self {
            success: true,
            rows: Some(rows),
            error: None,
        }
    }

    /// Successful result with no records
    pub fn empty() -> Self {
        Self::ok(Vec::new())
    }

    /// Failed result with an error description
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            rows: None,
            error: Some(error.into()),
        }
    }

    /// Number of records carried, zero when failed
    pub fn row_count(&self) -> usize {
        self.rows.as_ref().map(Vec::len).unwrap_or(0)
    }
}

//! Host result envelope
//!
//! The host framework's uniform-execute contract expects every tool
//! invocation to come back as a fixed triple: the JSON serialization of
//! the underlying result wrapper, a numeric score that is always `0.0`,
//! and a metadata mapping that is always empty. The shape is imposed by
//! the host, not chosen here; this type keeps it at the boundary so the
//! internal wrapper stays free of host-specific structure.

use crate::db::DbToolResult;
use serde::Serialize;
use std::collections::HashMap;

/// Score reported for every tool invocation
pub const ENVELOPE_SCORE: f64 = 0.0;

/// The `(text, score, metadata)` triple returned to the host
#[derive(Debug, Clone, PartialEq)]
pub struct ToolEnvelope {
    /// JSON serialization of the underlying result
    pub text: String,
    /// Always exactly `0.0`
    pub score: f64,
    /// Always empty
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ToolEnvelope {
    /// Wrap a serializable result into the host triple.
    pub fn wrap<T: Serialize>(result: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            text: serde_json::to_string(result)?,
            score: ENVELOPE_SCORE,
            metadata: HashMap::new(),
        })
    }

    /// Decompose into the raw triple the host consumes.
    pub fn into_parts(self) -> (String, f64, HashMap<String, serde_json::Value>) {
        (self.text, self.score, self.metadata)
    }
}

impl TryFrom<&DbToolResult> for ToolEnvelope {
    type Error = serde_json::Error;

    fn try_from(result: &DbToolResult) -> Result<Self, Self::Error> {
        Self::wrap(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_success_wrapper() {
        let result = DbToolResult::ok(vec![json!({"name": "orders"})]);
        let envelope = ToolEnvelope::try_from(&result).unwrap();

        assert_eq!(envelope.text, serde_json::to_string(&result).unwrap());
        assert_eq!(envelope.score, 0.0);
        assert!(envelope.metadata.is_empty());
    }

    #[test]
    fn test_wrap_failed_wrapper() {
        let result = DbToolResult::failed("connection refused");
        let envelope = ToolEnvelope::try_from(&result).unwrap();

        assert!(envelope.text.contains("connection refused"));
        assert_eq!(envelope.score, 0.0);
        assert!(envelope.metadata.is_empty());
    }

    #[test]
    fn test_into_parts() {
        let envelope = ToolEnvelope::wrap(&DbToolResult::empty()).unwrap();
        let (text, score, metadata) = envelope.into_parts();
        assert_eq!(text, r#"{"success":true,"rows":[]}"#);
        assert_eq!(score, 0.0);
        assert!(metadata.is_empty());
    }
}

//! Read-only query tool

use crate::database::context::DbToolContext;
use async_trait::async_trait;
use dbagent_core::db::DbToolResult;
use dbagent_core::error::AgentResult;
use dbagent_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use std::sync::Arc;
use tracing::warn;

/// Runs a read-only SQL statement and returns its result set
///
/// The statement is delegated as-is; keeping it read-only is the
/// caller's responsibility, no SQL validation happens here.
pub struct QueryTool {
    context: Arc<DbToolContext>,
    schema: ToolSchema,
}

impl QueryTool {
    /// Build the tool over a shared context, storing the schema verbatim
    pub fn new(context: Arc<DbToolContext>, schema: ToolSchema) -> Self {
        Self { context, schema }
    }

    /// Built-in schema for hosts that do not supply their own
    pub fn default_schema() -> ToolSchema {
        ToolSchema::new(
            "read_query",
            "Execute a read-only SQL statement and return its result set.",
            vec![ToolParameter::string("sql", "The SQL statement to execute")],
        )
    }

    /// Run a query; pure delegation to the introspector.
    pub async fn read_query(&self, sql: &str) -> AgentResult<DbToolResult> {
        let introspector = self.context.introspector(None).await?;
        let result = introspector.read_query(sql.to_owned()).await;
        if !result.success {
            warn!(?result, "read_query failed");
        }
        Ok(result)
    }
}

#[async_trait]
impl Tool for QueryTool {
    fn name(&self) -> &str {
        &self.schema.name
    }

    fn description(&self) -> &str {
        &self.schema.description
    }

    fn schema(&self) -> ToolSchema {
        self.schema.clone()
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let sql = call
            .get_string("sql")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'sql' parameter".to_string()))?;
        if sql.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "SQL statement cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        self.validate(call)?;
        let sql = call
            .get_string("sql")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'sql' parameter".to_string()))?;

        let result = self.read_query(&sql).await?;
        let output = serde_json::to_string(&result)?;
        Ok(ToolResult::success(&call.id, self.name(), output))
    }
}

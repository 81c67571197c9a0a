//! Schema listing tool

use crate::database::context::DbToolContext;
use async_trait::async_trait;
use dbagent_core::db::DbToolResult;
use dbagent_core::error::AgentResult;
use dbagent_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use std::sync::Arc;
use tracing::{info, warn};

/// Lists schemas for a catalog/database
pub struct SchemaTool {
    context: Arc<DbToolContext>,
    schema: ToolSchema,
}

impl SchemaTool {
    /// Build the tool over a shared context, storing the schema verbatim
    pub fn new(context: Arc<DbToolContext>, schema: ToolSchema) -> Self {
        Self { context, schema }
    }

    /// Built-in schema for hosts that do not supply their own
    pub fn default_schema() -> ToolSchema {
        ToolSchema::new(
            "list_schemas",
            "List schemas for a catalog/database.",
            vec![
                ToolParameter::optional_string("catalog", "Catalog to scope the listing to"),
                ToolParameter::optional_string("database", "Database to list schemas for"),
                ToolParameter::boolean("include_sys", "Include system schemas")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    /// List schemas; pure delegation to the introspector.
    pub async fn list_schemas(
        &self,
        catalog: Option<&str>,
        database: Option<&str>,
        include_sys: bool,
    ) -> AgentResult<DbToolResult> {
        let introspector = self.context.introspector(database).await?;
        let result = introspector
            .list_schemas(
                catalog.map(ToOwned::to_owned),
                database.map(ToOwned::to_owned),
                include_sys,
            )
            .await;
        if result.success {
            info!(count = result.row_count(), "listed schemas");
        } else {
            warn!(?result, "list_schemas failed");
        }
        Ok(result)
    }
}

#[async_trait]
impl Tool for SchemaTool {
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

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let catalog = call.get_string("catalog");
        let database = call.get_string("database");
        let include_sys = call.get_bool("include_sys").unwrap_or(false);

        let result = self
            .list_schemas(catalog.as_deref(), database.as_deref(), include_sys)
            .await?;
        let output = serde_json::to_string(&result)?;
        Ok(ToolResult::success(&call.id, self.name(), output))
    }
}

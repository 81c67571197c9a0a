//! Table listing tool

use crate::database::context::DbToolContext;
use async_trait::async_trait;
use dbagent_core::db::DbToolResult;
use dbagent_core::error::AgentResult;
use dbagent_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use std::sync::Arc;
use tracing::{info, warn};

/// Lists tables (and optionally views) for a catalog/database/schema
pub struct ListTableTool {
    context: Arc<DbToolContext>,
    schema: ToolSchema,
}

impl ListTableTool {
    /// Build the tool over a shared context, storing the schema verbatim
    pub fn new(context: Arc<DbToolContext>, schema: ToolSchema) -> Self {
        Self { context, schema }
    }

    /// Built-in schema for hosts that do not supply their own
    pub fn default_schema() -> ToolSchema {
        ToolSchema::new(
            "list_tables",
            "List tables for a catalog/database/schema.",
            vec![
                ToolParameter::optional_string("catalog", "Catalog to scope the listing to"),
                ToolParameter::optional_string("database", "Database to list tables for"),
                ToolParameter::optional_string("schema_name", "Schema to list tables for"),
                ToolParameter::boolean("include_views", "Include views in the listing")
                    .optional()
                    .with_default(true),
            ],
        )
    }

    /// List tables; pure delegation to the introspector.
    pub async fn list_tables(
        &self,
        catalog: Option<&str>,
        database: Option<&str>,
        schema_name: Option<&str>,
        include_views: bool,
    ) -> AgentResult<DbToolResult> {
        let introspector = self.context.introspector(database).await?;
        let result = introspector
            .list_tables(
                catalog.map(ToOwned::to_owned),
                database.map(ToOwned::to_owned),
                schema_name.map(ToOwned::to_owned),
                include_views,
            )
            .await;
        if result.success {
            info!(count = result.row_count(), "listed tables");
        } else {
            warn!(?result, "list_tables failed");
        }
        Ok(result)
    }
}

#[async_trait]
impl Tool for ListTableTool {
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
        let schema_name = call.get_string("schema_name");
        let include_views = call.get_bool("include_views").unwrap_or(true);

        let result = self
            .list_tables(
                catalog.as_deref(),
                database.as_deref(),
                schema_name.as_deref(),
                include_views,
            )
            .await?;
        let output = serde_json::to_string(&result)?;
        Ok(ToolResult::success(&call.id, self.name(), output))
    }
}

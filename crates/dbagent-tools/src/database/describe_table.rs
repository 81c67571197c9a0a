//! Table description tool

use crate::database::context::DbToolContext;
use async_trait::async_trait;
use dbagent_core::db::DbToolResult;
use dbagent_core::error::AgentResult;
use dbagent_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use std::sync::Arc;
use tracing::warn;

/// Describes one table's structure (columns, types, constraints)
pub struct DescTableTool {
    context: Arc<DbToolContext>,
    schema: ToolSchema,
}

impl DescTableTool {
    /// Build the tool over a shared context, storing the schema verbatim
    pub fn new(context: Arc<DbToolContext>, schema: ToolSchema) -> Self {
        Self { context, schema }
    }

    /// Built-in schema for hosts that do not supply their own
    pub fn default_schema() -> ToolSchema {
        ToolSchema::new(
            "describe_table",
            "Describe one table's structure: columns, types, and constraints.",
            vec![
                ToolParameter::string("table_name", "Name of the table to describe"),
                ToolParameter::optional_string("catalog", "Catalog the table lives in"),
                ToolParameter::optional_string("database", "Database the table lives in"),
                ToolParameter::optional_string("schema_name", "Schema the table lives in"),
                ToolParameter::string("table_type", "Object kind, 'table' or 'view'")
                    .optional()
                    .with_default("table"),
            ],
        )
    }

    /// Describe a table; pure delegation to the introspector.
    pub async fn describe_table(
        &self,
        table_name: &str,
        catalog: Option<&str>,
        database: Option<&str>,
        schema_name: Option<&str>,
        table_type: &str,
    ) -> AgentResult<DbToolResult> {
        let introspector = self.context.introspector(database).await?;
        let result = introspector
            .describe_table(
                table_name.to_owned(),
                catalog.map(ToOwned::to_owned),
                database.map(ToOwned::to_owned),
                schema_name.map(ToOwned::to_owned),
                table_type.to_owned(),
            )
            .await;
        if !result.success {
            warn!(table_name, ?result, "describe_table failed");
        }
        Ok(result)
    }
}

#[async_trait]
impl Tool for DescTableTool {
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
        let table_name = call.get_string("table_name").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'table_name' parameter".to_string())
        })?;
        if table_name.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "Table name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        self.validate(call)?;
        let table_name = call.get_string("table_name").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'table_name' parameter".to_string())
        })?;
        let catalog = call.get_string("catalog");
        let database = call.get_string("database");
        let schema_name = call.get_string("schema_name");
        let table_type = call
            .get_string("table_type")
            .unwrap_or_else(|| "table".to_string());

        let result = self
            .describe_table(
                &table_name,
                catalog.as_deref(),
                database.as_deref(),
                schema_name.as_deref(),
                &table_type,
            )
            .await?;
        let output = serde_json::to_string(&result)?;
        Ok(ToolResult::success(&call.id, self.name(), output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::{call, test_config};
    use dbagent_core::db::{DbDialect, MockDbIntrospector};
    use serde_json::json;

    #[tokio::test]
    async fn test_forwards_all_arguments_unchanged() {
        let expected = DbToolResult::ok(vec![json!({"name": "id", "type": "INTEGER"})]);
        let mut mock = MockDbIntrospector::new();
        let returned = expected.clone();
        mock.expect_describe_table()
            .withf(|table, catalog, database, schema, table_type| {
                table.as_str() == "orders"
                    && catalog.as_deref() == Some("cat")
                    && database.as_deref() == Some("sales")
                    && schema.as_deref() == Some("public")
                    && table_type.as_str() == "view"
            })
            .times(1)
            .returning(move |_, _, _, _, _| returned.clone());

        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Postgres),
            Arc::new(mock),
        ));
        let tool = DescTableTool::new(context, DescTableTool::default_schema());

        let result = tool
            .describe_table("orders", Some("cat"), Some("sales"), Some("public"), "view")
            .await
            .unwrap();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_execute_defaults_table_type() {
        let mut mock = MockDbIntrospector::new();
        mock.expect_describe_table()
            .withf(|table, _, _, _, table_type| {
                table.as_str() == "orders" && table_type.as_str() == "table"
            })
            .times(1)
            .returning(|_, _, _, _, _| DbToolResult::empty());

        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Mysql),
            Arc::new(mock),
        ));
        let tool = DescTableTool::new(context, DescTableTool::default_schema());

        let result = tool
            .execute(&call("call-1", "describe_table", json!({"table_name": "orders"})))
            .await
            .unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_execute_missing_table_name() {
        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Mysql),
            Arc::new(MockDbIntrospector::new()),
        ));
        let tool = DescTableTool::new(context, DescTableTool::default_schema());

        let err = tool
            .execute(&call("call-1", "describe_table", json!({})))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("table_name"));
    }

    #[test]
    fn test_validate_rejects_empty_table_name() {
        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Mysql),
            Arc::new(MockDbIntrospector::new()),
        ));
        let tool = DescTableTool::new(context, DescTableTool::default_schema());

        let result = tool.validate(&call("call-1", "describe_table", json!({"table_name": "  "})));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_table_name_before_delegation() {
        // The mock has no expectations; any introspector call would panic.
        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Mysql),
            Arc::new(MockDbIntrospector::new()),
        ));
        let tool = DescTableTool::new(context, DescTableTool::default_schema());

        let err = tool
            .execute(&call("call-1", "describe_table", json!({"table_name": "  "})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}

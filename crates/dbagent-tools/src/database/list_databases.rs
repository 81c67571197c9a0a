//! Database listing tool

use crate::database::context::DbToolContext;
use async_trait::async_trait;
use dbagent_core::db::DbToolResult;
use dbagent_core::error::AgentResult;
use dbagent_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use std::sync::Arc;
use tracing::warn;

/// Lists the databases visible to the current connection
pub struct DatabaseTool {
    context: Arc<DbToolContext>,
    schema: ToolSchema,
}

impl DatabaseTool {
    /// Build the tool over a shared context, storing the schema verbatim
    pub fn new(context: Arc<DbToolContext>, schema: ToolSchema) -> Self {
        Self { context, schema }
    }

    /// Built-in schema for hosts that do not supply their own
    pub fn default_schema() -> ToolSchema {
        ToolSchema::new(
            "list_databases",
            "List databases visible to the current connection.",
            vec![
                ToolParameter::optional_string("catalog", "Catalog to scope the listing to"),
                ToolParameter::boolean("include_sys", "Include system databases")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    /// List databases, optionally scoped to a catalog.
    ///
    /// Single-database engines have no catalog/database notion, so the
    /// operation short-circuits to an empty success without contacting
    /// the connection at all.
    pub async fn list_databases(
        &self,
        catalog: Option<&str>,
        include_sys: bool,
    ) -> AgentResult<DbToolResult> {
        if !self.context.dialect().supports_multiple_databases() {
            return Ok(DbToolResult::empty());
        }

        let introspector = self.context.introspector(None).await?;
        let result = introspector
            .list_databases(catalog.map(ToOwned::to_owned), include_sys)
            .await;
        if !result.success {
            warn!(?result, "list_databases failed");
        }
        Ok(result)
    }
}

#[async_trait]
impl Tool for DatabaseTool {
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
        let include_sys = call.get_bool("include_sys").unwrap_or(false);

        let result = self
            .list_databases(catalog.as_deref(), include_sys)
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
    async fn test_single_database_dialect_short_circuits() {
        // The mock has no expectations; any introspector call would panic.
        let mock = MockDbIntrospector::new();
        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Sqlite),
            Arc::new(mock),
        ));
        let tool = DatabaseTool::new(context, DatabaseTool::default_schema());

        for (catalog, include_sys) in [(None, false), (Some("catalog1"), true)] {
            let result = tool.list_databases(catalog, include_sys).await.unwrap();
            assert_eq!(result, DbToolResult::empty());
        }
    }

    #[tokio::test]
    async fn test_multi_database_dialect_forwards_arguments() {
        let expected = DbToolResult::ok(vec![json!({"database_name": "sales"})]);
        let mut mock = MockDbIntrospector::new();
        let returned = expected.clone();
        mock.expect_list_databases()
            .withf(|catalog, include_sys| catalog.as_deref() == Some("catalog1") && *include_sys)
            .times(1)
            .returning(move |_, _| returned.clone());

        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::StarRocks),
            Arc::new(mock),
        ));
        let tool = DatabaseTool::new(context, DatabaseTool::default_schema());

        let result = tool.list_databases(Some("catalog1"), true).await.unwrap();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_execute_serializes_wrapper() {
        let wrapper = DbToolResult::ok(vec![json!({"database_name": "sales"})]);
        let mut mock = MockDbIntrospector::new();
        let returned = wrapper.clone();
        mock.expect_list_databases()
            .returning(move |_, _| returned.clone());

        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Mysql),
            Arc::new(mock),
        ));
        let tool = DatabaseTool::new(context, DatabaseTool::default_schema());

        let result = tool
            .execute(&call("call-1", "list_databases", json!({})))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(
            result.output.unwrap(),
            serde_json::to_string(&wrapper).unwrap()
        );
    }

    #[test]
    fn test_schema_returned_verbatim() {
        let schema = ToolSchema::new("custom_name", "custom description", vec![]);
        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Sqlite),
            Arc::new(MockDbIntrospector::new()),
        ));
        let tool = DatabaseTool::new(context, schema.clone());
        assert_eq!(tool.schema(), schema);
        assert_eq!(tool.name(), "custom_name");
    }
}

//! Database tool adapters
//!
//! Five thin tools over the introspection seam: list databases, list
//! schemas, list tables, describe a table, and run a read-only query.
//! Each exposes its operation both as a typed method returning the raw
//! result wrapper and through the host framework's `Tool` contract.

pub mod context;
pub mod describe_table;
pub mod list_databases;
pub mod list_schemas;
pub mod list_tables;
pub mod query;

pub use context::DbToolContext;
pub use describe_table::DescTableTool;
pub use list_databases::DatabaseTool;
pub use list_schemas::SchemaTool;
pub use list_tables::ListTableTool;
pub use query::QueryTool;

use dbagent_core::config::ToolInit;
use dbagent_core::error::AgentResult;
use dbagent_core::tools::{Tool, ToolCall, ToolEnvelope, ToolError, ENVELOPE_SCORE};
use std::collections::HashMap;
use std::sync::Arc;

/// Build all five database tools over one shared context.
pub async fn database_tools(init: &ToolInit) -> AgentResult<Vec<Arc<dyn Tool>>> {
    let context = Arc::new(DbToolContext::initialize(init).await?);
    Ok(vec![
        Arc::new(DatabaseTool::new(
            Arc::clone(&context),
            DatabaseTool::default_schema(),
        )),
        Arc::new(SchemaTool::new(
            Arc::clone(&context),
            SchemaTool::default_schema(),
        )),
        Arc::new(ListTableTool::new(
            Arc::clone(&context),
            ListTableTool::default_schema(),
        )),
        Arc::new(DescTableTool::new(
            Arc::clone(&context),
            DescTableTool::default_schema(),
        )),
        Arc::new(QueryTool::new(context, QueryTool::default_schema())),
    ])
}

/// Run a tool and shape its output as the host's `(text, score, metadata)`
/// triple: the wrapper JSON, a score of exactly `0.0`, and empty metadata.
pub async fn execute_enveloped(
    tool: &dyn Tool,
    call: &ToolCall,
) -> Result<ToolEnvelope, ToolError> {
    let result = tool.execute(call).await?;
    let text = result.output.ok_or_else(|| {
        ToolError::ExecutionFailed(
            result
                .error
                .unwrap_or_else(|| "tool produced no output".to_string()),
        )
    })?;
    Ok(ToolEnvelope {
        text,
        score: ENVELOPE_SCORE,
        metadata: HashMap::new(),
    })
}


#[cfg(test)]
mod tests {
    use super::testing::{call, test_config};
    use super::*;
    use dbagent_core::db::{DbDialect, DbToolResult, MockDbIntrospector};
    use serde_json::json;

    #[tokio::test]
    async fn test_envelope_shape_for_success_and_failure() {
        for wrapper in [
            DbToolResult::ok(vec![json!({"schema_name": "public"})]),
            DbToolResult::failed("permission denied"),
        ] {
            let mut mock = MockDbIntrospector::new();
            let returned = wrapper.clone();
            mock.expect_list_schemas()
                .returning(move |_, _, _| returned.clone());

            let context = Arc::new(DbToolContext::with_introspector(
                test_config(DbDialect::Postgres),
                Arc::new(mock),
            ));
            let tool = SchemaTool::new(context, SchemaTool::default_schema());

            let envelope = execute_enveloped(&tool, &call("inst-1", "list_schemas", json!({})))
                .await
                .unwrap();
            assert_eq!(envelope.text, serde_json::to_string(&wrapper).unwrap());
            assert_eq!(envelope.score, 0.0);
            assert!(envelope.metadata.is_empty());
        }
    }

    #[tokio::test]
    async fn test_envelope_propagates_tool_level_errors() {
        let context = Arc::new(DbToolContext::with_introspector(
            test_config(DbDialect::Sqlite),
            Arc::new(MockDbIntrospector::new()),
        ));
        let tool = QueryTool::new(context, QueryTool::default_schema());

        // Missing 'sql' is a tool-level error, not a wrapped failure.
        let err = execute_enveloped(&tool, &call("inst-1", "read_query", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}

//! Execute query tool definition.
//!
//! Runs caller-supplied SQL as-is on the selected backend. The statement text
//! is not inspected beyond its leading keyword; values should be passed
//! through `params` rather than spliced into the query.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::gateway::{DatabaseKind, SqlGateway, SqlParam};
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// Parameters for the execute query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExecuteQueryParams {
    /// SQL query to execute.
    #[schemars(description = "SQL query to execute")]
    pub query: String,

    /// Database type (sqlite or mysql).
    #[serde(default)]
    #[schemars(description = "Database type (sqlite or mysql, default: sqlite)")]
    pub database: DatabaseKind,

    /// Positional parameters for `?` placeholders.
    #[serde(default)]
    #[schemars(description = "Parameters for prepared statements, bound in order")]
    pub params: Vec<SqlParam>,
}

/// Execute query tool - runs one SQL statement.
pub struct ExecuteQueryTool {
    gateway: Arc<SqlGateway>,
}

impl ExecuteQueryTool {
    pub fn new(gateway: Arc<SqlGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ToolDefinition for ExecuteQueryTool {
    const NAME: &'static str = "execute_query";

    const DESCRIPTION: &'static str = "Execute a SQL query on the database. SELECT/WITH/PRAGMA \
         (and SHOW/DESCRIBE on MySQL) return a column header and one '|'-separated line per row; \
         other statements report the number of affected rows.";

    type Params = ExecuteQueryParams;

    #[instrument(skip_all, fields(database = %params.database))]
    async fn execute(&self, params: ExecuteQueryParams) -> ToolResult<String> {
        let query = require(&params.query, "query")?;
        info!("Executing query with {} parameter(s)", params.params.len());
        self.gateway
            .execute(params.database, query, &params.params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatabaseConfig;
    use crate::domains::tools::{ToolError, ToolHandler};
    use rmcp::model::JsonObject;
    use tempfile::TempDir;

    fn tool(dir: &TempDir) -> ExecuteQueryTool {
        let config = DatabaseConfig {
            sqlite_path: dir.path().join("sample.db"),
            ..Default::default()
        };
        ExecuteQueryTool::new(Arc::new(SqlGateway::new(&config)))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_before_connecting() {
        let dir = TempDir::new().unwrap();
        let tool = tool(&dir);
        let err = tool
            .call(args(serde_json::json!({ "query": "   " })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter(ref f) if f == "query"));
        assert!(!dir.path().join("sample.db").exists());
    }

    #[tokio::test]
    async fn test_params_are_bound() {
        let dir = TempDir::new().unwrap();
        let tool = tool(&dir);
        tool.call(args(serde_json::json!({ "query": "CREATE TABLE kv (k TEXT, v INTEGER)" })))
            .await
            .unwrap();
        tool.call(args(serde_json::json!({
            "query": "INSERT INTO kv (k, v) VALUES (?, ?)",
            "params": ["answer", 42]
        })))
        .await
        .unwrap();

        let text = tool
            .call(args(serde_json::json!({
                "query": "SELECT v FROM kv WHERE k = ?",
                "database": "sqlite",
                "params": ["answer"]
            })))
            .await
            .unwrap();
        assert_eq!(text, "Columns: v\n\n42\n");
    }

    #[tokio::test]
    async fn test_unsupported_database_is_invalid_arguments() {
        let dir = TempDir::new().unwrap();
        let err = tool(&dir)
            .call(args(serde_json::json!({ "query": "SELECT 1", "database": "oracle" })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}

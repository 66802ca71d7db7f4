//! Describe table tool definition.
//!
//! Identifiers cannot be bound as parameters, so the table name is validated
//! and quoted before it is written into the introspection statement.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use super::gateway::{DatabaseKind, SqlGateway, identifier_parts};
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// Parameters for the describe table tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DescribeTableParams {
    /// Name of the table to describe.
    #[schemars(description = "Name of the table to describe")]
    pub table_name: String,

    /// Database type (sqlite or mysql).
    #[serde(default)]
    #[schemars(description = "Database type (sqlite or mysql, default: sqlite)")]
    pub database: DatabaseKind,
}

/// Describe table tool - shows column definitions of one table.
pub struct DescribeTableTool {
    gateway: Arc<SqlGateway>,
}

impl DescribeTableTool {
    pub fn new(gateway: Arc<SqlGateway>) -> Self {
        Self { gateway }
    }

    /// Build the schema statement for `table_name` on `database`.
    pub fn statement(table_name: &str, database: DatabaseKind) -> ToolResult<String> {
        let parts = identifier_parts(table_name)?;
        let statement = match (database, parts.as_slice()) {
            (DatabaseKind::Sqlite, [schema, table]) => {
                format!("PRAGMA \"{}\".table_info(\"{}\")", schema, table)
            }
            (DatabaseKind::Sqlite, _) => format!("PRAGMA table_info(\"{}\")", table_name),
            (DatabaseKind::Mysql, parts) => {
                let quoted: Vec<String> = parts.iter().map(|p| format!("`{}`", p)).collect();
                format!("DESCRIBE {}", quoted.join("."))
            }
        };
        Ok(statement)
    }
}

#[async_trait]
impl ToolDefinition for DescribeTableTool {
    const NAME: &'static str = "describe_table";

    const DESCRIPTION: &'static str = "Get table schema information (column names, types, \
         nullability, defaults and keys)";

    type Params = DescribeTableParams;

    async fn execute(&self, params: DescribeTableParams) -> ToolResult<String> {
        let table_name = require(&params.table_name, "table_name")?;
        info!("Describing table {} on {}", table_name, params.database);

        let statement = Self::statement(table_name, params.database).inspect_err(|e| {
            warn!("Rejected table name: {}", e);
        })?;

        self.gateway.execute(params.database, &statement, &[]).await
    }
}

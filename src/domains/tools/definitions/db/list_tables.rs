//! List tables tool definition.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::gateway::{DatabaseKind, SqlGateway};
use crate::domains::tools::{ToolDefinition, ToolResult};

/// User tables only; `sqlite_sequence` and friends are bookkeeping.
const SQLITE_LIST_TABLES: &str =
    "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'";

const MYSQL_LIST_TABLES: &str = "SHOW TABLES";

/// Parameters for the list tables tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTablesParams {
    /// Database type (sqlite or mysql).
    #[serde(default)]
    #[schemars(description = "Database type (sqlite or mysql, default: sqlite)")]
    pub database: DatabaseKind,
}

/// List tables tool - lists all tables in the database.
pub struct ListTablesTool {
    gateway: Arc<SqlGateway>,
}

impl ListTablesTool {
    pub fn new(gateway: Arc<SqlGateway>) -> Self {
        Self { gateway }
    }

    /// The introspection statement used for `database`.
    pub fn statement(database: DatabaseKind) -> &'static str {
        match database {
            DatabaseKind::Sqlite => SQLITE_LIST_TABLES,
            DatabaseKind::Mysql => MYSQL_LIST_TABLES,
        }
    }
}

#[async_trait]
impl ToolDefinition for ListTablesTool {
    const NAME: &'static str = "list_tables";

    const DESCRIPTION: &'static str = "List all tables in the database";

    type Params = ListTablesParams;

    async fn execute(&self, params: ListTablesParams) -> ToolResult<String> {
        info!("Listing tables on {}", params.database);
        self.gateway
            .execute(params.database, Self::statement(params.database), &[])
            .await
    }
}

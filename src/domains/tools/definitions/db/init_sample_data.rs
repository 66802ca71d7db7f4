//! Init sample data tool definition.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::gateway::{DatabaseKind, SqlGateway};
use crate::domains::tools::{ToolDefinition, ToolResult};

/// Parameters for the init sample data tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct InitSampleDataParams {
    /// Database type (sqlite or mysql).
    #[serde(default)]
    #[schemars(description = "Database type (sqlite or mysql, default: sqlite)")]
    pub database: DatabaseKind,
}

/// Init sample data tool - recreates the customers/products/orders schema.
pub struct InitSampleDataTool {
    gateway: Arc<SqlGateway>,
}

impl InitSampleDataTool {
    pub fn new(gateway: Arc<SqlGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ToolDefinition for InitSampleDataTool {
    const NAME: &'static str = "init_sample_data";

    const DESCRIPTION: &'static str = "Initialize database with sample tables and data \
         (customers, products, orders). Existing sample tables are dropped first.";

    type Params = InitSampleDataParams;

    async fn execute(&self, params: InitSampleDataParams) -> ToolResult<String> {
        info!("Initializing sample data on {}", params.database);
        self.gateway.init_sample_data(params.database).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatabaseConfig;
    use crate::domains::tools::definitions::db::{
        ExecuteQueryParams, ExecuteQueryTool, ListTablesParams, ListTablesTool,
    };
    use tempfile::TempDir;

    fn gateway(dir: &TempDir) -> Arc<SqlGateway> {
        let config = DatabaseConfig {
            sqlite_path: dir.path().join("databases").join("sample.db"),
            ..Default::default()
        };
        Arc::new(SqlGateway::new(&config))
    }

    fn data_rows(text: &str) -> Vec<&str> {
        text.split_once("\n\n")
            .map(|(_, rows)| rows.lines().collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_init_then_list_tables() {
        let dir = TempDir::new().unwrap();
        let gateway = gateway(&dir);

        let text = InitSampleDataTool::new(gateway.clone())
            .execute(InitSampleDataParams::default())
            .await
            .unwrap();
        assert!(text.starts_with("SQLite sample data initialized successfully at "));
        assert!(text.ends_with("sample.db"));

        let tables = ListTablesTool::new(gateway)
            .execute(ListTablesParams::default())
            .await
            .unwrap();
        assert!(tables.starts_with("Columns: name\n\n"));
        assert_eq!(data_rows(&tables), vec!["customers", "products", "orders"]);
    }

    #[tokio::test]
    async fn test_init_twice_keeps_five_customers() {
        let dir = TempDir::new().unwrap();
        let gateway = gateway(&dir);
        let tool = InitSampleDataTool::new(gateway.clone());

        tool.execute(InitSampleDataParams::default()).await.unwrap();
        tool.execute(InitSampleDataParams::default()).await.unwrap();

        let count = ExecuteQueryTool::new(gateway)
            .execute(ExecuteQueryParams {
                query: "SELECT COUNT(*) FROM customers".to_string(),
                database: DatabaseKind::Sqlite,
                params: Vec::new(),
            })
            .await
            .unwrap();
        assert_eq!(data_rows(&count), vec!["5"]);
    }

    #[tokio::test]
    async fn test_orders_reference_seeded_rows() {
        let dir = TempDir::new().unwrap();
        let gateway = gateway(&dir);
        InitSampleDataTool::new(gateway.clone())
            .execute(InitSampleDataParams::default())
            .await
            .unwrap();

        let text = gateway
            .execute(
                DatabaseKind::Sqlite,
                "SELECT c.name, p.name, o.quantity FROM orders o \
                 JOIN customers c ON c.id = o.customer_id \
                 JOIN products p ON p.id = o.product_id \
                 WHERE o.id = 6",
                &[],
            )
            .await
            .unwrap();
        assert_eq!(data_rows(&text), vec!["David Brown | Notebook | 10"]);
    }
}

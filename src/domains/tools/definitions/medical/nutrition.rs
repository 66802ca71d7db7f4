//! Nutritionix natural-language nutrients tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::common::{endpoint, send_json};
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// Parameters for the nutrition facts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NutritionFactsParams {
    #[schemars(description = "Food description (e.g., '1 cup rice', '100g chicken breast')")]
    pub food_query: String,

    #[schemars(description = "Nutritionix API key")]
    pub api_key: String,

    #[schemars(description = "Nutritionix App ID")]
    pub app_id: String,
}

/// Nutrition facts tool.
pub struct NutritionFactsTool {
    http: Client,
    base_url: String,
}

impl NutritionFactsTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ToolDefinition for NutritionFactsTool {
    const NAME: &'static str = "nutrition_facts";

    const DESCRIPTION: &'static str = "Get nutritional information for foods using Nutritionix API";

    type Params = NutritionFactsParams;

    async fn execute(&self, params: NutritionFactsParams) -> ToolResult<String> {
        let query = require(&params.food_query, "food_query")?;
        let api_key = require(&params.api_key, "api_key")?;
        let app_id = require(&params.app_id, "app_id")?;
        info!("Nutrition facts for: {}", query);

        let request = self
            .http
            .post(endpoint(&self.base_url, &["v2", "natural", "nutrients"])?)
            .header("x-app-id", app_id)
            .header("x-app-key", api_key)
            .json(&json!({ "query": query }));
        send_json(request).await
    }
}

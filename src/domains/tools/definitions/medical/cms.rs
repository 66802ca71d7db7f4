//! healthcare.gov marketplace plan search tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{endpoint, send_json};
use crate::domains::tools::{ToolDefinition, ToolResult, require};

const MARKET: &str = "Individual";

/// Parameters for the CMS marketplace plans tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CmsMarketplacePlansParams {
    #[schemars(description = "ZIP code for plan search")]
    pub zip_code: String,

    #[schemars(description = "Age for premium calculation")]
    pub age: Option<u32>,

    #[schemars(description = "CMS API key")]
    pub api_key: String,
}

/// CMS marketplace plans tool.
pub struct CmsMarketplacePlansTool {
    http: Client,
    base_url: String,
}

impl CmsMarketplacePlansTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ToolDefinition for CmsMarketplacePlansTool {
    const NAME: &'static str = "cms_marketplace_plans";

    const DESCRIPTION: &'static str = "Search CMS Marketplace for health insurance plans";

    type Params = CmsMarketplacePlansParams;

    async fn execute(&self, params: CmsMarketplacePlansParams) -> ToolResult<String> {
        let zip_code = require(&params.zip_code, "zip_code")?;
        let api_key = require(&params.api_key, "api_key")?;
        info!("Marketplace plan search for {}", zip_code);

        let mut query = vec![("zipcode", zip_code.to_string()), ("market", MARKET.to_string())];
        if let Some(age) = params.age.filter(|a| *a > 0) {
            query.push(("age", age.to_string()));
        }

        let request = self
            .http
            .get(endpoint(&self.base_url, &["api", "v1", "plans", "search"])?)
            .bearer_auth(api_key)
            .query(&query);
        send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search_with_bearer_and_age() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/plans/search")
            .match_header("authorization", "Bearer secret")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("zipcode".into(), "27360".into()),
                Matcher::UrlEncoded("market".into(), "Individual".into()),
                Matcher::UrlEncoded("age".into(), "42".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"plans":[]}"#)
            .create_async()
            .await;

        let tool = CmsMarketplacePlansTool::new(Client::new(), &server.url());
        tool.execute(CmsMarketplacePlansParams {
            zip_code: "27360".into(),
            age: Some(42),
            api_key: "secret".into(),
        })
        .await
        .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let tool = CmsMarketplacePlansTool::new(Client::new(), "http://127.0.0.1:1");
        let err = tool
            .execute(CmsMarketplacePlansParams {
                zip_code: "27360".into(),
                age: None,
                api_key: " ".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: api_key");
    }
}

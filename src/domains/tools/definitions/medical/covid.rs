//! disease.sh COVID-19 statistics tools.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{endpoint, send_json};
use crate::domains::tools::{ToolDefinition, ToolResult, require};

/// The global statistics tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CovidStatsGlobalParams {}

/// Global COVID-19 statistics.
pub struct CovidStatsGlobalTool {
    http: Client,
    base_url: String,
}

impl CovidStatsGlobalTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ToolDefinition for CovidStatsGlobalTool {
    const NAME: &'static str = "covid_stats_global";

    const DESCRIPTION: &'static str = "Get global COVID-19 statistics";

    type Params = CovidStatsGlobalParams;

    async fn execute(&self, _params: CovidStatsGlobalParams) -> ToolResult<String> {
        info!("Fetching global COVID-19 statistics");
        let url = endpoint(&self.base_url, &["v3", "covid-19", "all"])?;
        send_json(self.http.get(url)).await
    }
}

/// Parameters for the per-country statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CovidStatsCountryParams {
    #[schemars(description = "Country name (e.g., 'USA', 'UK', 'India')")]
    pub country: String,
}

/// COVID-19 statistics for one country.
pub struct CovidStatsCountryTool {
    http: Client,
    base_url: String,
}

impl CovidStatsCountryTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ToolDefinition for CovidStatsCountryTool {
    const NAME: &'static str = "covid_stats_country";

    const DESCRIPTION: &'static str = "Get COVID-19 statistics for a specific country";

    type Params = CovidStatsCountryParams;

    async fn execute(&self, params: CovidStatsCountryParams) -> ToolResult<String> {
        let country = require(&params.country, "country")?;
        info!("Fetching COVID-19 statistics for {}", country);
        let url = endpoint(&self.base_url, &["v3", "covid-19", "countries", country])?;
        send_json(self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolHandler;
    use mockito::Server;
    use rmcp::model::JsonObject;

    #[tokio::test]
    async fn test_global_stats_are_reindented() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v3/covid-19/all")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"cases":704753890,"deaths":7010681}"#)
            .create_async()
            .await;

        let tool = CovidStatsGlobalTool::new(Client::new(), &server.url());
        let text = tool.call(JsonObject::new()).await.unwrap();
        assert_eq!(text, "{\n  \"cases\": 704753890,\n  \"deaths\": 7010681\n}");
    }

    #[tokio::test]
    async fn test_unknown_country_is_http_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v3/covid-19/countries/Atlantis")
            .with_status(404)
            .with_body(r#"{"message":"Country not found or doesn't have any cases"}"#)
            .create_async()
            .await;

        let tool = CovidStatsCountryTool::new(Client::new(), &server.url());
        let err = tool
            .execute(CovidStatsCountryParams {
                country: "Atlantis".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"HTTP 404 - {"message":"Country not found or doesn't have any cases"}"#
        );
    }

    #[tokio::test]
    async fn test_non_json_success_is_malformed() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v3/covid-19/countries/France")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let tool = CovidStatsCountryTool::new(Client::new(), &server.url());
        let err = tool
            .execute(CovidStatsCountryParams {
                country: "France".into(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Response is not valid JSON"));
    }
}

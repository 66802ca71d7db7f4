//! Infermedica diagnosis tool.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::common::{endpoint, send_json};
use crate::domains::tools::{ToolDefinition, ToolError, ToolResult, present, require};

/// Patient sex as Infermedica expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Parameters for the Infermedica diagnosis tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InfermedicaDiagnosisParams {
    #[schemars(description = "Patient age in years")]
    pub age: u32,

    #[schemars(description = "Patient sex (male or female)")]
    pub sex: Sex,

    #[schemars(description = "List of symptoms (e.g., ['headache', 'sore throat'])")]
    pub symptoms: Vec<String>,

    #[schemars(description = "Infermedica API key")]
    pub api_key: String,

    /// Falls back to `api_key` when absent.
    #[schemars(description = "Infermedica App ID (defaults to the API key)")]
    pub app_id: Option<String>,
}

/// Infermedica diagnosis tool.
pub struct InfermedicaDiagnosisTool {
    http: Client,
    base_url: String,
}

impl InfermedicaDiagnosisTool {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Evidence id for a free-text symptom: lowercased, spaces as underscores.
    pub fn evidence_id(symptom: &str) -> String {
        symptom.trim().to_lowercase().replace(' ', "_")
    }

    /// Request body for `/v3/diagnosis`.
    pub fn request_body(params: &InfermedicaDiagnosisParams) -> serde_json::Value {
        let evidence: Vec<serde_json::Value> = params
            .symptoms
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| json!({ "id": Self::evidence_id(s), "choice_id": "present" }))
            .collect();

        json!({
            "sex": params.sex,
            "age": { "value": params.age },
            "evidence": evidence,
        })
    }
}

#[async_trait]
impl ToolDefinition for InfermedicaDiagnosisTool {
    const NAME: &'static str = "infermedica_diagnosis";

    const DESCRIPTION: &'static str =
        "Get medical diagnosis suggestions from Infermedica (requires API key)";

    type Params = InfermedicaDiagnosisParams;

    async fn execute(&self, params: InfermedicaDiagnosisParams) -> ToolResult<String> {
        if params.age == 0 {
            return Err(ToolError::invalid_arguments("age must be greater than zero"));
        }
        if params.symptoms.iter().all(|s| s.trim().is_empty()) {
            return Err(ToolError::missing("symptoms"));
        }
        let api_key = require(&params.api_key, "api_key")?;
        let app_id = present(&params.app_id).unwrap_or(api_key);

        info!("Infermedica diagnosis with {} symptom(s)", params.symptoms.len());

        let request = self
            .http
            .post(endpoint(&self.base_url, &["v3", "diagnosis"])?)
            .header("App-Id", app_id)
            .header("App-Key", api_key)
            .json(&Self::request_body(&params));
        send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolHandler;
    use mockito::{Matcher, Server};

    fn params(symptoms: &[&str]) -> InfermedicaDiagnosisParams {
        InfermedicaDiagnosisParams {
            age: 30,
            sex: Sex::Female,
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            api_key: "key".to_string(),
            app_id: None,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = InfermedicaDiagnosisTool::request_body(&params(&["Sore Throat", "fever"]));
        assert_eq!(
            body,
            json!({
                "sex": "female",
                "age": { "value": 30 },
                "evidence": [
                    { "id": "sore_throat", "choice_id": "present" },
                    { "id": "fever", "choice_id": "present" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_posts_with_app_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/diagnosis")
            .match_header("App-Id", "key")
            .match_header("App-Key", "key")
            .match_body(Matcher::PartialJson(json!({ "sex": "female" })))
            .with_status(200)
            .with_body(r#"{"conditions":[]}"#)
            .create_async()
            .await;

        let tool = InfermedicaDiagnosisTool::new(Client::new(), &server.url());
        tool.execute(params(&["headache"])).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_symptoms_is_rejected() {
        let tool = InfermedicaDiagnosisTool::new(Client::new(), "http://127.0.0.1:1");
        let err = tool.execute(params(&[])).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: symptoms");
    }

    #[tokio::test]
    async fn test_unknown_sex_is_invalid_arguments() {
        let tool = InfermedicaDiagnosisTool::new(Client::new(), "http://127.0.0.1:1");
        let args = json!({ "age": 40, "sex": "other", "symptoms": ["cough"], "api_key": "k" });
        let err = tool
            .call(args.as_object().cloned().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}

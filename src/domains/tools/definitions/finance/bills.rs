//! Bills report tool definition.
//!
//! Fetches the bills webhook and passes the `data` string through verbatim.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::core::config::Config;

use super::super::super::ToolError;
use super::super::common::{fetch_body, success_result};

const ENDPOINT: &str = "bills webhook";

/// Parameters for the bills tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct BillsDataParams {}

/// Expected shape of the bills webhook response.
#[derive(Debug, Clone, Deserialize)]
struct BillsResponse {
    /// The pre-rendered bills report text.
    #[serde(default)]
    data: Option<String>,
}

/// Bills tool - returns the upstream report text unchanged.
pub struct BillsDataTool;

impl BillsDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_bills_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets bills data";

    /// Execute the tool logic: one GET, pass the `data` field through.
    ///
    /// An absent `data` field is a typed error, not an empty success.
    pub async fn execute(
        client: &reqwest::Client,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        info!("Fetching bills data");

        let body = fetch_body(client.get(&config.upstream.bills_webhook_url)).await?;
        let response: BillsResponse = serde_json::from_str(&body)
            .map_err(|e| ToolError::unexpected_shape(ENDPOINT, e.to_string()))?;

        let data = response
            .data
            .ok_or_else(|| ToolError::missing_field(ENDPOINT, "data"))?;

        Ok(success_result(data))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<BillsDataParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>(config: Arc<Config>, client: reqwest::Client) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            let client = client.clone();
            async move {
                let _params: BillsDataParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &config)
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::result_text;
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        let mut config = Config::default();
        config.upstream.bills_webhook_url = format!("{}/bills", base_url);
        config
    }

    #[tokio::test]
    async fn test_execute_passes_data_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "hello"})))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let result = BillsDataTool::execute(&client, &config).await.unwrap();
        assert_eq!(result_text(&result), "hello");
    }

    #[tokio::test]
    async fn test_execute_fails_on_missing_data_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"other": 1})))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let result = BillsDataTool::execute(&client, &config).await;
        assert!(matches!(
            result,
            Err(ToolError::MissingField { field: "data", .. })
        ));
    }

    #[tokio::test]
    async fn test_execute_fails_on_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let result = BillsDataTool::execute(&client, &config).await;
        assert!(matches!(result, Err(ToolError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_execute_fails_on_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let result = BillsDataTool::execute(&client, &config).await;
        assert!(matches!(result, Err(ToolError::UnexpectedShape { .. })));
    }
}

//! Profile picture check tool definition.
//!
//! Checks whether a user has a profile picture via
//! `GET {base}/api/has_picture?EMAIL={email}`.

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
use super::common::{api_url, passthrough_json, require_email};

const ENDPOINT: &str = "profile picture API";

/// Parameters for the profile picture check tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HasPictureParams {
    /// Customer email.
    #[schemars(description = "Customer email")]
    pub email: String,
}

/// Profile picture tool - queries the flag and echoes the response.
pub struct HasPictureTool;

impl HasPictureTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "has_profile_picture";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Checks whether the specified user has a profile picture";

    /// Execute the tool logic: one GET with the email as a query parameter.
    pub async fn execute(
        params: &HasPictureParams,
        client: &reqwest::Client,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        require_email(&params.email)?;
        info!("Checking profile picture for {}", params.email);

        let url = api_url(&config.upstream.account_api_base, &["api", "has_picture"])?;
        let request = client.get(url).query(&[("EMAIL", params.email.as_str())]);

        passthrough_json(request, ENDPOINT).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HasPictureParams>(),
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
                let params: HasPictureParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params, &client, &config)
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
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        let mut config = Config::default();
        config.upstream.account_api_base = base_url.to_string();
        config
    }

    #[tokio::test]
    async fn test_execute_queries_by_email() {
        let server = MockServer::start().await;
        let upstream = json!({"has_picture": false, "email": "user@example.com"});
        Mock::given(method("GET"))
            .and(path("/api/has_picture"))
            .and(query_param("EMAIL", "user@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let params = HasPictureParams {
            email: "user@example.com".to_string(),
        };
        let result = HasPictureTool::execute(&params, &client, &config)
            .await
            .unwrap();

        let echoed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(echoed, upstream);
    }

    #[tokio::test]
    async fn test_execute_rejects_malformed_email() {
        let config = test_config("https://example.com");
        let client = reqwest::Client::new();
        let params = HasPictureParams {
            email: "user@".to_string(),
        };
        let result = HasPictureTool::execute(&params, &client, &config).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_execute_fails_on_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let params = HasPictureParams {
            email: "user@example.com".to_string(),
        };
        let result = HasPictureTool::execute(&params, &client, &config).await;
        assert!(matches!(result, Err(ToolError::Upstream(_))));
    }
}

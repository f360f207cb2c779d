//! Auto-messages delegation tool definition.
//!
//! Delegates messaging tasks for a user by email via
//! `POST {base}/api/sirri_api/auto_messages_email` with a form-encoded body.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::header::CONTENT_TYPE;
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

const ENDPOINT: &str = "auto-messages API";

/// Parameters for the auto-messages delegation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AutoMessagesParams {
    /// Customer email for scheduling messages.
    #[schemars(description = "Customer email for scheduling messages")]
    pub email: String,
}

/// Auto-messages tool - delegates messaging and echoes the response.
pub struct AutoMessagesTool;

impl AutoMessagesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delegate_auto_messages";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delegates messaging tasks for a user by email";

    /// Execute the tool logic: one form-encoded POST.
    ///
    /// The body is built with `serde_urlencoded` so the email is properly
    /// escaped (`a b@x.com` becomes `EMAIL=a+b%40x.com`).
    pub async fn execute(
        params: &AutoMessagesParams,
        client: &reqwest::Client,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        require_email(&params.email)?;
        info!("Delegating auto messages for {}", params.email);

        let url = api_url(
            &config.upstream.account_api_base,
            &["api", "sirri_api", "auto_messages_email"],
        )?;
        let body = serde_urlencoded::to_string([("EMAIL", params.email.as_str())])?;

        let request = client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);

        passthrough_json(request, ENDPOINT).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AutoMessagesParams>(),
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
                let params: AutoMessagesParams =
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
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        let mut config = Config::default();
        config.upstream.account_api_base = base_url.to_string();
        config
    }

    #[tokio::test]
    async fn test_execute_posts_encoded_form_body() {
        let server = MockServer::start().await;
        let upstream = json!({"queued": 3});
        Mock::given(method("POST"))
            .and(path("/api/sirri_api/auto_messages_email"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("EMAIL=user%40example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let params = AutoMessagesParams {
            email: "user@example.com".to_string(),
        };
        let result = AutoMessagesTool::execute(&params, &client, &config)
            .await
            .unwrap();

        let echoed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(echoed, upstream);
    }

    #[test]
    fn test_form_body_escapes_reserved_characters() {
        // The original concatenated the email unescaped; this asserts the
        // fixed behavior instead.
        let body = serde_urlencoded::to_string([("EMAIL", "a b@x.com")]).unwrap();
        assert_eq!(body, "EMAIL=a+b%40x.com");
    }

    #[tokio::test]
    async fn test_execute_rejects_email_with_whitespace() {
        let config = test_config("https://example.com");
        let client = reqwest::Client::new();
        let params = AutoMessagesParams {
            email: "a b@x.com".to_string(),
        };
        let result = AutoMessagesTool::execute(&params, &client, &config).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_execute_fails_on_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let client = reqwest::Client::new();
        let params = AutoMessagesParams {
            email: "user@example.com".to_string(),
        };
        let result = AutoMessagesTool::execute(&params, &client, &config).await;
        assert!(matches!(result, Err(ToolError::Upstream(_))));
    }
}

//! Account activation tool definition.
//!
//! Activates a customer account by email via
//! `GET {base}/api/sirri_api/activate/{email}`.

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

const ENDPOINT: &str = "account activation API";

/// Parameters for the account activation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ActivateAccountParams {
    /// Customer email to activate.
    #[schemars(description = "Customer email to activate")]
    pub email: String,
}

/// Account activation tool - triggers activation and echoes the response.
pub struct ActivateAccountTool;

impl ActivateAccountTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "activate_account";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Activates a customer's account by email";

    /// Execute the tool logic: one GET with the email as a path segment.
    pub async fn execute(
        params: &ActivateAccountParams,
        client: &reqwest::Client,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        require_email(&params.email)?;
        info!("Activating account for {}", params.email);

        let url = api_url(
            &config.upstream.account_api_base,
            &["api", "sirri_api", "activate", &params.email],
        )?;

        passthrough_json(client.get(url), ENDPOINT).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ActivateAccountParams>(),
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
                let params: ActivateAccountParams =
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

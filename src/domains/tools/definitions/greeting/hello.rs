//! Hello world tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::success_result;

/// Parameters for the hello world tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HelloWorldParams {
    /// Name to greet.
    #[schemars(description = "Name to greet")]
    pub name: String,
}

/// Hello world tool - returns a deterministic greeting.
pub struct HelloWorldTool;

impl HelloWorldTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "hello_world";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "A simple hello world tool";

    /// Execute the tool logic. Pure: no I/O of any kind.
    pub fn execute(params: &HelloWorldParams) -> CallToolResult {
        success_result(generate_greeting(&params.name))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HelloWorldParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: HelloWorldParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

/// Build the greeting for a name.
pub fn generate_greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

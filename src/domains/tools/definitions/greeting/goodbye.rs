//! Goodbye tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::success_result;

/// Parameters for the goodbye tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GoodbyeParams {
    /// Name to bid farewell to.
    #[schemars(description = "Name to bid farewell to")]
    pub name: String,
}

/// Goodbye tool - returns a deterministic farewell.
pub struct GoodbyeTool;

impl GoodbyeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "goodbye";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "A simple goodbye tool";

    /// Execute the tool logic. Pure: no I/O of any kind.
    pub fn execute(params: &GoodbyeParams) -> CallToolResult {
        success_result(generate_farewell(&params.name))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GoodbyeParams>(),
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
                let params: GoodbyeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

/// Build the farewell for a name.
pub fn generate_farewell(name: &str) -> String {
    format!("Goodbye, {}!", name)
}

#[cfg(test)]
mod tests {
    use super::super::super::common::result_text;
    use super::*;

    #[test]
    fn test_farewell_is_deterministic() {
        assert_eq!(generate_farewell("Alice"), "Goodbye, Alice!");
        assert_eq!(generate_farewell("Alice"), generate_farewell("Alice"));
    }

    #[test]
    fn test_execute_returns_farewell() {
        let params = GoodbyeParams {
            name: "Bob".to_string(),
        };
        let result = GoodbyeTool::execute(&params);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Goodbye, Bob!");
    }
}

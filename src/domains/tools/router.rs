//! Tool Router - builds the rmcp ToolRouter for all transports.
//!
//! The router is built once at startup from an explicit, immutable list of
//! routes; each tool knows how to create its own route. Webhook-backed
//! tools receive the shared configuration and HTTP client here.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    ActivateAccountTool, AutoMessagesTool, BillsDataTool, FinancialDataTool, GoodbyeTool,
    HasPictureTool, HelloWorldTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, client: reqwest::Client) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(HelloWorldTool::create_route())
        .with_route(GoodbyeTool::create_route())
        .with_route(FinancialDataTool::create_route(
            config.clone(),
            client.clone(),
        ))
        .with_route(BillsDataTool::create_route(config.clone(), client.clone()))
        .with_route(ActivateAccountTool::create_route(
            config.clone(),
            client.clone(),
        ))
        .with_route(AutoMessagesTool::create_route(
            config.clone(),
            client.clone(),
        ))
        .with_route(HasPictureTool::create_route(config, client))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> =
            build_tool_router(test_config(), reqwest::Client::new());
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"hello_world"));
        assert!(names.contains(&"goodbye"));
        assert!(names.contains(&"get_financial_data"));
        assert!(names.contains(&"get_bills_data"));
        assert!(names.contains(&"activate_account"));
        assert!(names.contains(&"delegate_auto_messages"));
        assert!(names.contains(&"has_profile_picture"));
    }

    #[test]
    fn test_router_tools_have_descriptions() {
        let router: ToolRouter<TestServer> =
            build_tool_router(test_config(), reqwest::Client::new());
        for tool in router.list_all() {
            assert!(
                tool.description.as_ref().is_some_and(|d| !d.is_empty()),
                "tool {} has no description",
                tool.name
            );
        }
    }
}

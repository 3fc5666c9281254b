use crate::azure::{client::AzureDevOpsClient, projects};
use crate::mcp::tools::support::to_tool_result;
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct ListProjectsArgs {}

pub async fn list_projects(
    client: Arc<AzureDevOpsClient>,
    _args: ListProjectsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!("Tool invoked: list_projects");
    let result = projects::list_projects(&client).await;

    // Project names are all an agent needs to pick one
    to_tool_result("list_projects", result, |projects| {
        let names: Vec<String> = projects.into_iter().map(|p| p.name).collect();
        json!({ "projects": names })
    })
}

use crate::azure::{backlogs, client::AzureDevOpsClient};
use crate::mcp::tools::support::{
    deserialize_non_empty_string, deserialize_optional_non_empty_string, to_tool_result,
};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct ListBacklogsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Team ID or name (optional, defaults to the project's default team)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub team: Option<String>,
}

pub async fn list_backlogs(
    client: Arc<AzureDevOpsClient>,
    args: ListBacklogsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: list_backlogs(project={}, team={:?})",
        args.project,
        args.team
    );
    let result = backlogs::list_backlogs(&client, &args.project, args.team.as_deref()).await;
    to_tool_result("list_backlogs", result, |levels| {
        json!({ "backlogs": levels })
    })
}

use crate::azure::{client::AzureDevOpsClient, iterations};
use crate::mcp::tools::support::{deserialize_non_empty_string, to_tool_result};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct GetTeamCurrentIterationArgs {
    /// AzDO project
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Team ID or name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub team: String,
}

pub async fn get_team_current_iteration(
    client: Arc<AzureDevOpsClient>,
    args: GetTeamCurrentIterationArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_team_current_iteration(project={}, team={})",
        args.project,
        args.team
    );

    let result = iterations::get_team_current_iteration(&client, &args.project, &args.team).await;

    // `null` when the team has no iteration covering today
    to_tool_result("get_team_current_iteration", result, |iteration| {
        json!({ "iteration": iteration })
    })
}

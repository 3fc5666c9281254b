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
pub struct ListTeamIterationsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Team ID or name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub team: String,
}

pub async fn list_team_iterations(
    client: Arc<AzureDevOpsClient>,
    args: ListTeamIterationsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: list_team_iterations(project={}, team={})",
        args.project,
        args.team
    );
    let result = iterations::list_team_iterations(&client, &args.project, &args.team).await;

    to_tool_result("list_team_iterations", result, |iterations| {
        let iterations: Vec<_> = iterations
            .into_iter()
            .map(|i| {
                json!({
                    "id": i.id,
                    "name": i.name,
                    "path": i.path,
                    "attributes": i.attributes.map(|a| json!(a)).unwrap_or_else(|| json!({})),
                })
            })
            .collect();
        json!({ "iterations": iterations })
    })
}

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
pub struct AssignIterationArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Team ID or name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub team: String,
    /// Iteration identifier (GUID)
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub iteration_id: String,
}

pub async fn assign_iteration(
    client: Arc<AzureDevOpsClient>,
    args: AssignIterationArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: assign_iteration(project={}, team={}, iteration_id={})",
        args.project,
        args.team,
        args.iteration_id
    );
    let result =
        iterations::assign_iteration(&client, &args.project, &args.team, &args.iteration_id)
            .await;

    to_tool_result("assign_iteration", result, |iteration| {
        json!({ "assigned_iteration": iteration })
    })
}

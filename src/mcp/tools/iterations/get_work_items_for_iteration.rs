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
pub struct GetWorkItemsForIterationArgs {
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

pub async fn get_work_items_for_iteration(
    client: Arc<AzureDevOpsClient>,
    args: GetWorkItemsForIterationArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_work_items_for_iteration(project={}, team={}, iteration_id={})",
        args.project,
        args.team,
        args.iteration_id
    );
    let result = iterations::get_iteration_work_items(
        &client,
        &args.project,
        &args.team,
        &args.iteration_id,
    )
    .await;

    to_tool_result("get_work_items_for_iteration", result, |items| {
        json!({ "work_items": items })
    })
}

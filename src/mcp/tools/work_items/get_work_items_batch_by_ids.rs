use crate::azure::{client::AzureDevOpsClient, work_items};
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
pub struct GetWorkItemsBatchByIdsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Work item IDs
    pub ids: Vec<u32>,
}

pub async fn get_work_items_batch_by_ids(
    client: Arc<AzureDevOpsClient>,
    args: GetWorkItemsBatchByIdsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_work_items_batch_by_ids(project={}, ids={:?})",
        args.project,
        args.ids
    );
    let result = work_items::get_work_items(&client, &args.project, &args.ids).await;
    to_tool_result("get_work_items_batch_by_ids", result, |items| {
        json!({ "work_items": items })
    })
}

use crate::azure::{client::AzureDevOpsClient, work_items};
use crate::mcp::tools::support::{deserialize_non_empty_string, to_tool_result};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::Value;
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct GetWorkItemArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Work item ID
    pub work_item_id: u32,
}

pub async fn get_work_item(
    client: Arc<AzureDevOpsClient>,
    args: GetWorkItemArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_work_item(project={}, work_item_id={})",
        args.project,
        args.work_item_id
    );
    let result =
        work_items::get_work_item::<Value>(&client, &args.project, args.work_item_id).await;
    to_tool_result("get_work_item", result, |work_item| work_item)
}

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
pub struct MyWorkItemsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
}

pub async fn my_work_items(
    client: Arc<AzureDevOpsClient>,
    args: MyWorkItemsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!("Tool invoked: my_work_items(project={})", args.project);
    let result = work_items::my_work_item_ids(&client, &args.project).await;
    to_tool_result("my_work_items", result, |ids| json!({ "work_item_ids": ids }))
}

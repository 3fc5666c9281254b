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
pub struct AddWorkItemCommentArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Work item ID to add comment to
    pub work_item_id: u32,
    /// Comment text (supports markdown)
    pub text: String,
}

pub async fn add_work_item_comment(
    client: Arc<AzureDevOpsClient>,
    args: AddWorkItemCommentArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: add_work_item_comment(work_item_id={}, text_length={})",
        args.work_item_id,
        args.text.len()
    );

    let result =
        work_items::add_comment(&client, &args.project, args.work_item_id, &args.text).await;
    to_tool_result("add_work_item_comment", result, |comment| {
        json!({ "comment": comment })
    })
}

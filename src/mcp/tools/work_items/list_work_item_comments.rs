use crate::azure::{client::AzureDevOpsClient, work_items};
use crate::mcp::tools::support::{deserialize_non_empty_string, html_to_text, to_tool_result};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct ListWorkItemCommentsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Work item ID
    pub work_item_id: u32,
}

pub async fn list_work_item_comments(
    client: Arc<AzureDevOpsClient>,
    args: ListWorkItemCommentsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: list_work_item_comments(project={}, work_item_id={})",
        args.project,
        args.work_item_id
    );
    let result = work_items::list_comments(&client, &args.project, args.work_item_id).await;

    to_tool_result("list_work_item_comments", result, |comments| {
        let comments: Vec<_> = comments
            .into_iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "text": html_to_text(&c.text),
                    "createdBy": c.created_by.and_then(|who| who.display_name),
                })
            })
            .collect();
        json!({ "comments": comments })
    })
}

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
pub struct ListBacklogWorkItemsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Backlog level ID as returned by list_backlogs (e.g. Microsoft.EpicCategory)
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub backlog_category: String,
    /// Team ID or name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub team: Option<String>,
}

pub async fn list_backlog_work_items(
    client: Arc<AzureDevOpsClient>,
    args: ListBacklogWorkItemsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: list_backlog_work_items(project={}, backlog_category={}, team={:?})",
        args.project,
        args.backlog_category,
        args.team
    );
    let result = backlogs::list_backlog_work_item_ids(
        &client,
        &args.project,
        args.team.as_deref(),
        &args.backlog_category,
    )
    .await;
    to_tool_result("list_backlog_work_items", result, |ids| {
        json!({ "work_item_ids": ids })
    })
}

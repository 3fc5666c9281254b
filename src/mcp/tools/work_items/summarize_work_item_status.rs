use crate::azure::{client::AzureDevOpsClient, hierarchy};
use crate::mcp::tools::support::{
    deserialize_non_empty_string, simplify_work_item_json, to_tool_result,
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
pub struct SummarizeWorkItemStatusArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Work item ID to summarize
    pub work_item_id: u32,
}

pub async fn summarize_work_item_status(
    client: Arc<AzureDevOpsClient>,
    args: SummarizeWorkItemStatusArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: summarize_work_item_status(project={}, work_item_id={})",
        args.project,
        args.work_item_id
    );

    let result =
        hierarchy::summarize_work_item_status(client.as_ref(), &args.project, args.work_item_id)
            .await;

    to_tool_result("summarize_work_item_status", result, |summary| {
        let mut summary = json!(summary);
        simplify_work_item_json(&mut summary);
        summary
    })
}

use crate::azure::{client::AzureDevOpsClient, work_items};
use crate::mcp::tools::support::{deserialize_non_empty_string, to_tool_result};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct UpdateWorkItemArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Work item ID to update
    pub work_item_id: u32,
    /// Field reference names to new values, applied in the given order
    /// (e.g., {"System.State": "Closed"})
    pub fields: Map<String, Value>,
}

pub async fn update_work_item(
    client: Arc<AzureDevOpsClient>,
    args: UpdateWorkItemArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: update_work_item(project={}, work_item_id={}, fields={:?})",
        args.project,
        args.work_item_id,
        args.fields.keys().collect::<Vec<_>>()
    );

    let result =
        work_items::update_work_item(&client, &args.project, args.work_item_id, &args.fields)
            .await;
    to_tool_result("update_work_item", result, |work_item| work_item)
}

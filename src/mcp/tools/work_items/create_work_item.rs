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
pub struct CreateWorkItemArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Type of work item (Task, Bug, User Story, Epic, Feature, etc.)
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub work_item_type: String,
    /// Field reference names to values, applied in the given order
    /// (e.g., {"System.Title": "New Task", "System.AssignedTo": "ana@contoso.com"})
    pub fields: Map<String, Value>,
}

pub async fn create_work_item(
    client: Arc<AzureDevOpsClient>,
    args: CreateWorkItemArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: create_work_item(project={}, work_item_type={}, fields={:?})",
        args.project,
        args.work_item_type,
        args.fields.keys().collect::<Vec<_>>()
    );

    let result = work_items::create_work_item(
        &client,
        &args.project,
        &args.work_item_type,
        &args.fields,
    )
    .await;
    to_tool_result("create_work_item", result, |work_item| work_item)
}

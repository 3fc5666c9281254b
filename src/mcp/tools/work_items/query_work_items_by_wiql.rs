use crate::azure::{client::AzureDevOpsClient, work_items};
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
pub struct QueryWorkItemsByWiqlArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// WIQL query (e.g., "SELECT [System.Id] FROM WorkItems WHERE [System.State] = 'Active'")
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub query: String,
}

pub async fn query_work_items_by_wiql(
    client: Arc<AzureDevOpsClient>,
    args: QueryWorkItemsByWiqlArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: query_work_items_by_wiql(project={}, query={})",
        args.project,
        args.query
    );
    let result = work_items::query_work_items(&client, &args.project, &args.query).await;

    to_tool_result("query_work_items_by_wiql", result, |items| {
        let mut items = json!(items);
        simplify_work_item_json(&mut items);
        json!({ "work_items": items })
    })
}

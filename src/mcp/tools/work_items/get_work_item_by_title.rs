use crate::azure::client::{AzureDevOpsClient, AzureError};
use crate::azure::work_items;
use crate::mcp::tools::support::{
    azure_error_result, deserialize_non_blank_string, deserialize_non_empty_string, json_result,
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
pub struct GetWorkItemByTitleArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Exact work item title, matched as given
    #[serde(deserialize_with = "deserialize_non_blank_string")]
    pub title: String,
}

pub async fn get_work_item_by_title(
    client: Arc<AzureDevOpsClient>,
    args: GetWorkItemByTitleArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_work_item_by_title(project={}, title={})",
        args.project,
        args.title
    );

    match work_items::find_work_item_id_by_title(&client, &args.project, &args.title).await {
        Ok(Some(id)) => json_result(&json!({ "work_item_id": id })),
        Ok(None) => Ok(azure_error_result(
            "get_work_item_by_title",
            &AzureError::NotFound(format!(
                "No work item titled '{}' in project '{}'",
                args.title, args.project
            )),
        )),
        Err(err) => Ok(azure_error_result("get_work_item_by_title", &err)),
    }
}

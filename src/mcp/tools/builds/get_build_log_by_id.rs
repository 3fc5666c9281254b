use crate::azure::{builds, client::AzureDevOpsClient};
use crate::mcp::tools::support::{deserialize_optional_non_empty_string, to_tool_result};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct GetBuildLogByIdArgs {
    /// Build ID
    pub build_id: u32,
    /// Log ID as listed by get_build_log
    pub log_id: u32,
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn get_build_log_by_id(
    client: Arc<AzureDevOpsClient>,
    args: GetBuildLogByIdArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_build_log_by_id(build_id={}, log_id={}, project={:?})",
        args.build_id,
        args.log_id,
        args.project
    );
    let result =
        builds::get_build_log(&client, args.project.as_deref(), args.build_id, args.log_id).await;
    to_tool_result("get_build_log_by_id", result, |log| json!({ "log": log }))
}

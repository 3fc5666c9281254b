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
pub struct GetBuildStatusArgs {
    /// Build ID
    pub build_id: u32,
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn get_build_status(
    client: Arc<AzureDevOpsClient>,
    args: GetBuildStatusArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_build_status(build_id={}, project={:?})",
        args.build_id,
        args.project
    );
    let result = builds::get_build_status(&client, args.project.as_deref(), args.build_id).await;
    to_tool_result("get_build_status", result, |build| {
        json!({
            "build_id": build.id,
            "status": build.status,
            "result": build.result,
            "queue_time": build.queue_time,
            "start_time": build.start_time,
            "finish_time": build.finish_time,
        })
    })
}

use crate::azure::{builds, client::AzureDevOpsClient};
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
pub struct UpdateBuildStageArgs {
    /// Build ID
    pub build_id: u32,
    /// Stage name as shown in the run
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub stage_name: String,
    /// New stage status (e.g., "retry", "cancel")
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub status: String,
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn update_build_stage(
    client: Arc<AzureDevOpsClient>,
    args: UpdateBuildStageArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: update_build_stage(build_id={}, stage_name={}, status={})",
        args.build_id,
        args.stage_name,
        args.status
    );
    let result = builds::update_build_stage(
        &client,
        args.project.as_deref(),
        args.build_id,
        &args.stage_name,
        &args.status,
    )
    .await;
    to_tool_result("update_build_stage", result, |()| {
        json!({
            "message": format!("Stage '{}' updated to '{}'", args.stage_name, args.status)
        })
    })
}

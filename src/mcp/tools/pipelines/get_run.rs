use crate::azure::{client::AzureDevOpsClient, pipelines};
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
pub struct GetRunArgs {
    /// Pipeline run ID
    pub run_id: u32,
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn get_run(
    client: Arc<AzureDevOpsClient>,
    args: GetRunArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_run(run_id={}, project={:?})",
        args.run_id,
        args.project
    );
    let result = pipelines::get_run(&client, args.project.as_deref(), args.run_id).await;
    to_tool_result("get_run", result, |run| json!({ "run": run }))
}

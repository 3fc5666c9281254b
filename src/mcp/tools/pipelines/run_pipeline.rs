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
pub struct RunPipelineArgs {
    /// Pipeline ID
    pub pipeline_id: u32,
    /// Branch ref to run (e.g., refs/heads/main); the pipeline default when omitted
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub branch: Option<String>,
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn run_pipeline(
    client: Arc<AzureDevOpsClient>,
    args: RunPipelineArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: run_pipeline(pipeline_id={}, branch={:?}, project={:?})",
        args.pipeline_id,
        args.branch,
        args.project
    );
    let result = pipelines::run_pipeline(
        &client,
        args.project.as_deref(),
        args.pipeline_id,
        args.branch.as_deref(),
    )
    .await;
    to_tool_result("run_pipeline", result, |run| json!({ "queued_run": run }))
}

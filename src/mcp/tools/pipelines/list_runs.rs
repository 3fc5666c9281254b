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
pub struct ListRunsArgs {
    /// Only runs of this pipeline (optional)
    #[serde(default)]
    pub pipeline_id: Option<u32>,
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn list_runs(
    client: Arc<AzureDevOpsClient>,
    args: ListRunsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: list_runs(pipeline_id={:?}, project={:?})",
        args.pipeline_id,
        args.project
    );
    let result = pipelines::list_runs(&client, args.project.as_deref(), args.pipeline_id).await;
    to_tool_result("list_runs", result, |runs| json!({ "runs": runs }))
}

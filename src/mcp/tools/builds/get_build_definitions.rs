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
pub struct GetBuildDefinitionsArgs {
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn get_build_definitions(
    client: Arc<AzureDevOpsClient>,
    args: GetBuildDefinitionsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_build_definitions(project={:?})",
        args.project
    );
    let result = builds::list_build_definitions(&client, args.project.as_deref()).await;
    to_tool_result("get_build_definitions", result, |definitions| {
        json!({ "definitions": definitions })
    })
}

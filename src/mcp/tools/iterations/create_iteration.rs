use crate::azure::{client::AzureDevOpsClient, iterations};
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
pub struct CreateIterationArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Iteration name (e.g., "Sprint 10")
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub name: String,
    /// Optional path (e.g., "Project\\Iteration")
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub path: Option<String>,
}

pub async fn create_iteration(
    client: Arc<AzureDevOpsClient>,
    args: CreateIterationArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: create_iteration(project={}, name={}, path={:?})",
        args.project,
        args.name,
        args.path
    );
    let result =
        iterations::create_iteration(&client, &args.project, &args.name, args.path.as_deref())
            .await;

    to_tool_result("create_iteration", result, |iteration| {
        json!({ "iteration": iteration })
    })
}

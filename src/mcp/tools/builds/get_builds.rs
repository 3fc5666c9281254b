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
pub struct GetBuildsArgs {
    /// Only builds of this build definition (optional)
    #[serde(default)]
    pub definition_id: Option<u32>,
    /// AzDO project name (optional)
    #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
    pub project: Option<String>,
}

pub async fn get_builds(
    client: Arc<AzureDevOpsClient>,
    args: GetBuildsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_builds(definition_id={:?}, project={:?})",
        args.definition_id,
        args.project
    );
    let result = builds::list_builds(&client, args.project.as_deref(), args.definition_id).await;
    to_tool_result("get_builds", result, |builds| json!({ "builds": builds }))
}

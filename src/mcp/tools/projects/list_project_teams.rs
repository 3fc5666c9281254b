use crate::azure::{client::AzureDevOpsClient, projects};
use crate::mcp::tools::support::{deserialize_non_empty_string, to_tool_result};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct ListProjectTeamsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
}

pub async fn list_project_teams(
    client: Arc<AzureDevOpsClient>,
    args: ListProjectTeamsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!("Tool invoked: list_project_teams(project={})", args.project);
    let result = projects::list_project_teams(&client, &args.project).await;

    to_tool_result("list_project_teams", result, |teams| {
        let teams: Vec<_> = teams
            .into_iter()
            .map(|t| json!({ "id": t.id, "name": t.name }))
            .collect();
        json!({ "teams": teams })
    })
}

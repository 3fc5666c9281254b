use crate::azure::{client::AzureDevOpsClient, identities};
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
pub struct GetIdentityIdsArgs {
    /// Display name (or part of it) of the user or group
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub display_name: String,
}

pub async fn get_identity_ids(
    client: Arc<AzureDevOpsClient>,
    args: GetIdentityIdsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: get_identity_ids(display_name={})",
        args.display_name
    );
    let result = identities::search_identities(&client, &args.display_name).await;

    to_tool_result("get_identity_ids", result, |identities| {
        let identities: Vec<_> = identities
            .into_iter()
            .map(|i| {
                json!({
                    "id": i.id,
                    "displayName": i.display_name,
                    "uniqueName": i.unique_name,
                })
            })
            .collect();
        json!({ "identities": identities })
    })
}

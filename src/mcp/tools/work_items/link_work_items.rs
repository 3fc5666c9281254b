use crate::azure::hierarchy::RelationKind;
use crate::azure::{client::AzureDevOpsClient, work_items};
use crate::mcp::tools::support::{deserialize_non_empty_string, to_tool_result};
use rmcp::{
    ErrorData as McpError,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    serde::Deserialize,
};
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
pub struct LinkWorkItemsArgs {
    /// AzDO project name
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub project: String,
    /// Source work item ID
    pub source_id: u32,
    /// Target work item ID
    pub target_id: u32,
    /// What the target is to the source: "child", "parent", "blocker", "related",
    /// "duplicate", or a relation reference name used as-is
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub link_type: String,
}

/// Maps friendly link names to Azure DevOps relation reference names.
pub fn link_type_reference(link_type: &str) -> &str {
    match link_type.to_lowercase().as_str() {
        "child" => RelationKind::HierarchyForward.reference_name(),
        "parent" => RelationKind::HierarchyReverse.reference_name(),
        "blocker" | "dependency" => RelationKind::DependencyForward.reference_name(),
        "blocked" | "successor" => RelationKind::DependencyReverse.reference_name(),
        "related" => RelationKind::Related.reference_name(),
        "duplicate" => "System.LinkTypes.Duplicate-Forward",
        _ => link_type,
    }
}

pub async fn link_work_items(
    client: Arc<AzureDevOpsClient>,
    args: LinkWorkItemsArgs,
) -> Result<CallToolResult, McpError> {
    log::info!(
        "Tool invoked: link_work_items(source_id={}, target_id={}, link_type={})",
        args.source_id,
        args.target_id,
        args.link_type
    );

    let result = work_items::link_work_items(
        &client,
        &args.project,
        args.source_id,
        args.target_id,
        link_type_reference(&args.link_type),
    )
    .await;
    to_tool_result("link_work_items", result, |work_item| work_item)
}

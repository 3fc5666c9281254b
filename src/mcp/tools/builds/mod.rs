// Builds module
pub mod get_build_changes;
pub mod get_build_definition_revisions;
pub mod get_build_definitions;
pub mod get_build_log;
pub mod get_build_log_by_id;
pub mod get_build_status;
pub mod get_builds;
pub mod update_build_stage;

pub use get_build_changes::{GetBuildChangesArgs, get_build_changes};
pub use get_build_definition_revisions::{
    GetBuildDefinitionRevisionsArgs, get_build_definition_revisions,
};
pub use get_build_definitions::{GetBuildDefinitionsArgs, get_build_definitions};
pub use get_build_log::{GetBuildLogArgs, get_build_log};
pub use get_build_log_by_id::{GetBuildLogByIdArgs, get_build_log_by_id};
pub use get_build_status::{GetBuildStatusArgs, get_build_status};
pub use get_builds::{GetBuildsArgs, get_builds};
pub use update_build_stage::{UpdateBuildStageArgs, update_build_stage};

use crate::mcp::registry::ToolRegistry;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "get_builds",
        "List builds, optionally for one build definition",
        get_builds,
    );
    registry.register(
        "get_build_changes",
        "List the source changes included in a build",
        get_build_changes,
    );
    registry.register(
        "get_build_definitions",
        "List build definitions",
        get_build_definitions,
    );
    registry.register(
        "get_build_definition_revisions",
        "List the revision history of a build definition",
        get_build_definition_revisions,
    );
    registry.register(
        "get_build_log",
        "List the logs of a build",
        get_build_log,
    );
    registry.register(
        "get_build_log_by_id",
        "Get the text of one build log",
        get_build_log_by_id,
    );
    registry.register(
        "get_build_status",
        "Get the status, result and timings of a build",
        get_build_status,
    );
    registry.register(
        "update_build_stage",
        "Update the status of a stage of a build (e.g. retry or cancel it)",
        update_build_stage,
    );
}

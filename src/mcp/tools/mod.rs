pub mod backlogs;
pub mod builds;
pub mod identities;
pub mod iterations;
pub mod pipelines;
pub mod projects;
pub mod support;
pub mod work_items;

use crate::mcp::registry::ToolRegistry;

/// Adds every Azure DevOps tool to `registry`.
pub fn register_tools(registry: &mut ToolRegistry) {
    projects::register(registry);
    identities::register(registry);
    iterations::register(registry);
    work_items::register(registry);
    backlogs::register(registry);
    builds::register(registry);
    pipelines::register(registry);
}

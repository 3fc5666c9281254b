// Backlogs module
pub mod list_backlog_work_items;
pub mod list_backlogs;

pub use list_backlog_work_items::{ListBacklogWorkItemsArgs, list_backlog_work_items};
pub use list_backlogs::{ListBacklogsArgs, list_backlogs};

use crate::mcp::registry::ToolRegistry;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "list_backlogs",
        "List the backlog levels (Epics, Features, Stories, Tasks) of a project or team",
        list_backlogs,
    );
    registry.register(
        "list_backlog_work_items",
        "Get the IDs of the work items on a backlog level (e.g. Microsoft.RequirementCategory)",
        list_backlog_work_items,
    );
}

// Projects module
pub mod list_project_teams;
pub mod list_projects;

pub use list_project_teams::{ListProjectTeamsArgs, list_project_teams};
pub use list_projects::{ListProjectsArgs, list_projects};

use crate::mcp::registry::ToolRegistry;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "list_projects",
        "List all Azure DevOps projects in the organization",
        list_projects,
    );
    registry.register(
        "list_project_teams",
        "List all teams within a specific Azure DevOps project",
        list_project_teams,
    );
}

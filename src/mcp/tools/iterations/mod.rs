// Iterations (sprints) module
pub mod assign_iteration;
pub mod create_iteration;
pub mod get_team_current_iteration;
pub mod get_work_items_for_iteration;
pub mod list_team_iterations;

pub use assign_iteration::{AssignIterationArgs, assign_iteration};
pub use create_iteration::{CreateIterationArgs, create_iteration};
pub use get_team_current_iteration::{GetTeamCurrentIterationArgs, get_team_current_iteration};
pub use get_work_items_for_iteration::{GetWorkItemsForIterationArgs, get_work_items_for_iteration};
pub use list_team_iterations::{ListTeamIterationsArgs, list_team_iterations};

use crate::mcp::registry::ToolRegistry;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "list_team_iterations",
        "List all iterations (sprints) for a specific team within a project",
        list_team_iterations,
    );
    registry.register(
        "get_team_current_iteration",
        "Get the current iteration (sprint) of a team",
        get_team_current_iteration,
    );
    registry.register(
        "create_iteration",
        "Create a new iteration (sprint) under the specified project, optionally below a parent path",
        create_iteration,
    );
    registry.register(
        "assign_iteration",
        "Assign an existing iteration (by ID) to a specific team",
        assign_iteration,
    );
    registry.register(
        "get_work_items_for_iteration",
        "Get all work items assigned to a specific iteration for a team",
        get_work_items_for_iteration,
    );
}

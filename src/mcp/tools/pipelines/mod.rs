// Pipelines module
pub mod get_run;
pub mod list_runs;
pub mod run_pipeline;

pub use get_run::{GetRunArgs, get_run};
pub use list_runs::{ListRunsArgs, list_runs};
pub use run_pipeline::{RunPipelineArgs, run_pipeline};

use crate::mcp::registry::ToolRegistry;

pub fn register(registry: &mut ToolRegistry) {
    registry.register("get_run", "Get a pipeline run by ID", get_run);
    registry.register(
        "list_runs",
        "List pipeline runs, optionally for one pipeline",
        list_runs,
    );
    registry.register(
        "run_pipeline",
        "Queue a new run of a pipeline, optionally on a specific branch",
        run_pipeline,
    );
}

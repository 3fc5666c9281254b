use crate::azure::builds::scope;
use crate::azure::client::{AzureDevOpsClient, AzureError};
use crate::azure::models::ListResponse;
use reqwest::Method;
use serde_json::{Value, json};

pub async fn get_run(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    run_id: u32,
) -> Result<Value, AzureError> {
    let path = client.versioned(&format!("pipelines/runs/{}", run_id));
    client
        .request(scope(project), Method::GET, &path, None::<&String>)
        .await
}

pub async fn list_runs(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    pipeline_id: Option<u32>,
) -> Result<Vec<Value>, AzureError> {
    let mut path = client.versioned("pipelines/runs");
    if let Some(id) = pipeline_id {
        path.push_str(&format!("&pipelineId={}", id));
    }
    let response: ListResponse<Value> = client
        .request(scope(project), Method::GET, &path, None::<&String>)
        .await?;
    Ok(response.value)
}

/// Request body for queueing a run, optionally pinned to a branch of the
/// pipeline's own repository.
pub fn run_request_body(branch: Option<&str>) -> Value {
    match branch {
        Some(branch) => json!({
            "resources": { "repositories": { "self": { "refName": branch } } }
        }),
        None => json!({}),
    }
}

pub async fn run_pipeline(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    pipeline_id: u32,
    branch: Option<&str>,
) -> Result<Value, AzureError> {
    let path = client.versioned(&format!("pipelines/{}/runs", pipeline_id));
    let body = run_request_body(branch);
    client
        .request(scope(project), Method::POST, &path, Some(&body))
        .await
}

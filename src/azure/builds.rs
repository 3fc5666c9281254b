use crate::azure::client::{AzureDevOpsClient, AzureError, Scope};
use crate::azure::models::ListResponse;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Status fields of a single build.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BuildStatus {
    pub id: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(rename = "queueTime", default)]
    pub queue_time: Option<String>,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "finishTime", default)]
    pub finish_time: Option<String>,
}

/// Build APIs are addressed at the organization unless a project is given.
pub(crate) fn scope(project: Option<&str>) -> Scope<'_> {
    match project {
        Some(project) => Scope::Project(project),
        None => Scope::Organization,
    }
}

async fn get_list(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    path: &str,
) -> Result<Vec<Value>, AzureError> {
    let path = client.versioned(path);
    let response: ListResponse<Value> = client
        .request(scope(project), Method::GET, &path, None::<&String>)
        .await?;
    Ok(response.value)
}

pub async fn list_builds(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    definition_id: Option<u32>,
) -> Result<Vec<Value>, AzureError> {
    let path = match definition_id {
        Some(id) => format!("build/builds?definitions={}", id),
        None => "build/builds".to_string(),
    };
    get_list(client, project, &path).await
}

pub async fn list_build_changes(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    build_id: u32,
) -> Result<Vec<Value>, AzureError> {
    get_list(client, project, &format!("build/builds/{}/changes", build_id)).await
}

pub async fn list_build_definitions(
    client: &AzureDevOpsClient,
    project: Option<&str>,
) -> Result<Vec<Value>, AzureError> {
    get_list(client, project, "build/definitions").await
}

pub async fn list_build_definition_revisions(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    definition_id: u32,
) -> Result<Vec<Value>, AzureError> {
    get_list(
        client,
        project,
        &format!("build/definitions/{}/revisions", definition_id),
    )
    .await
}

pub async fn list_build_logs(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    build_id: u32,
) -> Result<Vec<Value>, AzureError> {
    get_list(client, project, &format!("build/builds/{}/logs", build_id)).await
}

/// Content of one build log; the service answers with plain text.
pub async fn get_build_log(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    build_id: u32,
    log_id: u32,
) -> Result<String, AzureError> {
    let path = client.versioned(&format!("build/builds/{}/logs/{}", build_id, log_id));
    client.get_text(scope(project), &path).await
}

pub async fn get_build_status(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    build_id: u32,
) -> Result<BuildStatus, AzureError> {
    let path = client.versioned(&format!("build/builds/{}", build_id));
    client
        .request(scope(project), Method::GET, &path, None::<&String>)
        .await
}

/// The service may answer with an empty body, so only the status is checked.
pub async fn update_build_stage(
    client: &AzureDevOpsClient,
    project: Option<&str>,
    build_id: u32,
    stage_name: &str,
    status: &str,
) -> Result<(), AzureError> {
    let path = client.versioned(&format!("build/builds/{}", build_id));
    let body = json!({ "stageName": stage_name, "status": status });
    client
        .execute(scope(project), Method::PATCH, &path, Some(&body))
        .await
}

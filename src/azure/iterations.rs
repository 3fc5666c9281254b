use crate::azure::client::{AzureDevOpsClient, AzureError};
use crate::azure::models::ListResponse;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Serialize, Deserialize)]
pub struct IterationAttributes {
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "finishDate", default)]
    pub finish_date: Option<String>,
    #[serde(rename = "timeFrame", default)]
    pub time_frame: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamSettingsIteration {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub attributes: Option<IterationAttributes>,
}

/// Get all iterations for a team
pub async fn list_team_iterations(
    client: &AzureDevOpsClient,
    project: &str,
    team: &str,
) -> Result<Vec<TeamSettingsIteration>, AzureError> {
    // API: {org-url}/{project}/{team}/_apis/work/teamsettings/iterations
    let path = client.versioned("work/teamsettings/iterations");
    let response: ListResponse<TeamSettingsIteration> = client
        .team_request(project, team, Method::GET, &path, None::<&String>)
        .await?;
    Ok(response.value)
}

/// Get the current iteration for a team, if one is scheduled
pub async fn get_team_current_iteration(
    client: &AzureDevOpsClient,
    project: &str,
    team: &str,
) -> Result<Option<TeamSettingsIteration>, AzureError> {
    let path = client.versioned("work/teamsettings/iterations?$timeframe=current");
    let response: ListResponse<TeamSettingsIteration> = client
        .team_request(project, team, Method::GET, &path, None::<&String>)
        .await?;

    // With $timeframe=current there is at most one
    Ok(response.value.into_iter().next())
}

/// Create an iteration classification node under the project
pub async fn create_iteration(
    client: &AzureDevOpsClient,
    project: &str,
    name: &str,
    path: Option<&str>,
) -> Result<Value, AzureError> {
    let mut body = json!({ "name": name });
    if let Some(p) = path {
        body["path"] = json!(p);
    }

    let url_path = client.versioned("wit/classificationnodes/iterations");
    client.post(project, &url_path, &body).await
}

/// Subscribe a team to an existing iteration
pub async fn assign_iteration(
    client: &AzureDevOpsClient,
    project: &str,
    team: &str,
    iteration_id: &str,
) -> Result<Value, AzureError> {
    let path = client.versioned("work/teamsettings/iterations");
    let body = json!({ "id": iteration_id });
    client
        .team_request(project, team, Method::POST, &path, Some(&body))
        .await
}

/// Work item links assigned to a team iteration
pub async fn get_iteration_work_items(
    client: &AzureDevOpsClient,
    project: &str,
    team: &str,
    iteration_id: &str,
) -> Result<Vec<Value>, AzureError> {
    let path = client.versioned(&format!(
        "work/teamsettings/iterations/{}/workitems",
        urlencoding::encode(iteration_id)
    ));
    let mut response: Value = client
        .team_request(project, team, Method::GET, &path, None::<&String>)
        .await?;

    let items = ["workItemRelations", "workItems"]
        .iter()
        .find_map(|key| match response.get_mut(*key).map(Value::take) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        })
        .unwrap_or_default();
    Ok(items)
}

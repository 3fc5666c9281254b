use crate::azure::client::{AzureDevOpsClient, AzureError};
use crate::azure::models::ListResponse;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// List all projects in the organization
pub async fn list_projects(client: &AzureDevOpsClient) -> Result<Vec<Project>, AzureError> {
    let path = client.versioned("projects");
    let response: ListResponse<Project> = client
        .org_request(Method::GET, &path, None::<&String>)
        .await?;
    Ok(response.value)
}

/// List all teams in a project
pub async fn list_project_teams(
    client: &AzureDevOpsClient,
    project: &str,
) -> Result<Vec<Team>, AzureError> {
    // Teams API: {org-url}/_apis/projects/{project}/teams
    let path = client.versioned(&format!(
        "projects/{}/teams",
        urlencoding::encode(project)
    ));
    let response: ListResponse<Team> = client
        .org_request(Method::GET, &path, None::<&String>)
        .await?;
    Ok(response.value)
}

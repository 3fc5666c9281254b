use crate::azure::client::{AzureDevOpsClient, AzureError, Scope};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BacklogLevel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct BacklogConfiguration {
    #[serde(rename = "portfolioBacklogs", default)]
    portfolio_backlogs: Vec<BacklogLevel>,
    #[serde(rename = "requirementBacklog", default)]
    requirement_backlog: Option<BacklogLevel>,
    #[serde(rename = "taskBacklog", default)]
    task_backlog: Option<BacklogLevel>,
}

#[derive(Debug, Deserialize)]
struct BacklogWorkItemsResponse {
    #[serde(rename = "workItems", default)]
    work_items: Vec<BacklogWorkItemLink>,
}

#[derive(Debug, Deserialize)]
struct BacklogWorkItemLink {
    target: BacklogWorkItemTarget,
}

#[derive(Debug, Deserialize)]
struct BacklogWorkItemTarget {
    id: u32,
}

fn scope<'a>(project: &'a str, team: Option<&'a str>) -> Scope<'a> {
    match team {
        Some(team) => Scope::Team(project, team),
        None => Scope::Project(project),
    }
}

/// Backlog levels (Epics, Features, Stories, Tasks...) from portfolio down to
/// task level.
pub async fn list_backlogs(
    client: &AzureDevOpsClient,
    project: &str,
    team: Option<&str>,
) -> Result<Vec<BacklogLevel>, AzureError> {
    let path = client.versioned("work/backlogconfiguration");
    let config: BacklogConfiguration = client
        .request(scope(project, team), Method::GET, &path, None::<&String>)
        .await?;

    let mut levels = config.portfolio_backlogs;
    levels.extend(config.requirement_backlog);
    levels.extend(config.task_backlog);
    Ok(levels)
}

/// Ids of the work items on one backlog level, e.g. `Microsoft.EpicCategory`.
pub async fn list_backlog_work_item_ids(
    client: &AzureDevOpsClient,
    project: &str,
    team: Option<&str>,
    backlog_category: &str,
) -> Result<Vec<u32>, AzureError> {
    let path = client.versioned(&format!(
        "work/backlogs/{}/workItems",
        urlencoding::encode(backlog_category)
    ));
    let response: BacklogWorkItemsResponse = client
        .request(scope(project, team), Method::GET, &path, None::<&String>)
        .await?;

    Ok(response
        .work_items
        .into_iter()
        .map(|link| link.target.id)
        .collect())
}

use crate::azure::client::{AzureDevOpsClient, AzureError};
use crate::azure::models::ListResponse;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "uniqueName", default)]
    pub unique_name: Option<String>,
}

/// Search identities (users or groups) by display name
pub async fn search_identities(
    client: &AzureDevOpsClient,
    display_name: &str,
) -> Result<Vec<Identity>, AzureError> {
    let path = client.versioned(&format!(
        "identities?searchFilter=General&filterValue={}&queryMembership=None",
        urlencoding::encode(display_name)
    ));
    let response: ListResponse<Identity> = client
        .org_request(Method::GET, &path, None::<&String>)
        .await?;
    Ok(response.value)
}

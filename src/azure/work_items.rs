use crate::azure::client::{AzureDevOpsClient, AzureError};
use crate::azure::models::{
    Comment, CommentListResponse, ListResponse, WiqlQuery, WiqlResponse, WorkItem,
    WorkItemRelation,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, Serialize, PartialEq)]
pub struct JsonPatchOperation {
    pub op: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// One `add` operation per field, in the map's insertion order.
pub fn field_patch_operations(fields: &Map<String, Value>) -> Vec<JsonPatchOperation> {
    fields
        .iter()
        .map(|(field, value)| JsonPatchOperation {
            op: "add".to_string(),
            path: format!("/fields/{}", field),
            value: Some(value.clone()),
            from: None,
        })
        .collect()
}

/// Comments live behind a preview revision of the configured api-version.
fn comments_path(client: &AzureDevOpsClient, work_item_id: u32) -> String {
    format!(
        "wit/workItems/{}/comments?api-version={}-preview.3",
        work_item_id,
        client.api_version()
    )
}

/// Decodes into `T`: the typed [`WorkItem`], or `Value` to keep every key the
/// service returned (`_links`, `commentVersionRef`, ...).
pub async fn get_work_item<T: DeserializeOwned>(
    client: &AzureDevOpsClient,
    project: &str,
    id: u32,
) -> Result<T, AzureError> {
    let path = client.versioned(&format!("wit/workitems/{}", id));
    client.get(project, &path).await
}

/// Fetch a work item with `$expand=relations` and return only its relations.
pub async fn get_work_item_relations(
    client: &AzureDevOpsClient,
    project: &str,
    id: u32,
) -> Result<Vec<WorkItemRelation>, AzureError> {
    let path = client.versioned(&format!("wit/workitems/{}?$expand=relations", id));
    let work_item: WorkItem = client.get(project, &path).await?;
    Ok(work_item.relations.unwrap_or_default())
}

pub async fn get_work_items(
    client: &AzureDevOpsClient,
    project: &str,
    ids: &[u32],
) -> Result<Vec<WorkItem>, AzureError> {
    if ids.is_empty() {
        return Ok(vec![]);
    }

    let ids_str = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let path = client.versioned(&format!("wit/workitems?ids={}", ids_str));
    let response: ListResponse<WorkItem> = client.get(project, &path).await?;
    Ok(response.value)
}

pub async fn create_work_item(
    client: &AzureDevOpsClient,
    project: &str,
    work_item_type: &str,
    fields: &Map<String, Value>,
) -> Result<Value, AzureError> {
    let operations = field_patch_operations(fields);
    let path = client.versioned(&format!(
        "wit/workitems/${}",
        urlencoding::encode(work_item_type)
    ));
    client.post_patch(project, &path, &operations).await
}

pub async fn update_work_item(
    client: &AzureDevOpsClient,
    project: &str,
    id: u32,
    fields: &Map<String, Value>,
) -> Result<Value, AzureError> {
    let operations = field_patch_operations(fields);
    let path = client.versioned(&format!("wit/workitems/{}", id));
    client.patch_patch(project, &path, &operations).await
}

pub async fn link_work_items(
    client: &AzureDevOpsClient,
    project: &str,
    source_id: u32,
    target_id: u32,
    link_type: &str,
) -> Result<Value, AzureError> {
    let operations = vec![JsonPatchOperation {
        op: "add".to_string(),
        path: "/relations/-".to_string(),
        value: Some(serde_json::json!({
            "rel": link_type,
            "url": format!("{}/_apis/wit/workItems/{}", client.org_url(), target_id),
        })),
        from: None,
    }];

    let path = client.versioned(&format!("wit/workitems/{}", source_id));
    client.patch_patch(project, &path, &operations).await
}

/// Run a WIQL query and return the matching ids in the service's order.
pub async fn query_work_item_ids(
    client: &AzureDevOpsClient,
    project: &str,
    query: &str,
) -> Result<Vec<u32>, AzureError> {
    let wiql = WiqlQuery {
        query: query.to_string(),
    };
    let path = client.versioned("wit/wiql");
    let response: WiqlResponse = client.post(project, &path, &wiql).await?;
    Ok(response.work_items.iter().map(|wi| wi.id).collect())
}

pub async fn query_work_items(
    client: &AzureDevOpsClient,
    project: &str,
    query: &str,
) -> Result<Vec<WorkItem>, AzureError> {
    let ids = query_work_item_ids(client, project, query).await?;
    get_work_items(client, project, &ids).await
}

/// Ids of the work items assigned to the authenticated user, most recently
/// changed first.
pub async fn my_work_item_ids(
    client: &AzureDevOpsClient,
    project: &str,
) -> Result<Vec<u32>, AzureError> {
    let query = "SELECT [System.Id], [System.Title], [System.State] \
                 FROM WorkItems \
                 WHERE [System.AssignedTo] = @Me \
                 ORDER BY [System.ChangedDate] DESC";
    query_work_item_ids(client, project, query).await
}

/// Id of the first work item in the project whose title equals `title`.
pub async fn find_work_item_id_by_title(
    client: &AzureDevOpsClient,
    project: &str,
    title: &str,
) -> Result<Option<u32>, AzureError> {
    let query = format!(
        "SELECT [System.Id] FROM WorkItems \
         WHERE [System.TeamProject] = @project AND [System.Title] = '{}'",
        title.replace('\'', "''")
    );
    let ids = query_work_item_ids(client, project, &query).await?;
    Ok(ids.into_iter().next())
}

pub async fn list_comments(
    client: &AzureDevOpsClient,
    project: &str,
    work_item_id: u32,
) -> Result<Vec<Comment>, AzureError> {
    let path = comments_path(client, work_item_id);
    let response: CommentListResponse = client.get(project, &path).await?;
    Ok(response.comments)
}

pub async fn add_comment(
    client: &AzureDevOpsClient,
    project: &str,
    work_item_id: u32,
    text: &str,
) -> Result<Value, AzureError> {
    let path = comments_path(client, work_item_id);
    let body = serde_json::json!({
        "text": text
    });
    client.post(project, &path, &body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_operations_follow_input_order() {
        let mut fields = Map::new();
        fields.insert("System.Title".to_string(), json!("Fix login"));
        fields.insert("System.AssignedTo".to_string(), json!("ana@contoso.com"));
        fields.insert("Microsoft.VSTS.Common.Priority".to_string(), json!(1));

        let ops = field_patch_operations(&fields);
        let paths: Vec<&str> = ops.iter().map(|op| op.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/fields/System.Title",
                "/fields/System.AssignedTo",
                "/fields/Microsoft.VSTS.Common.Priority",
            ]
        );
        assert!(ops.iter().all(|op| op.op == "add" && op.from.is_none()));
        assert_eq!(ops[2].value, Some(json!(1)));
    }

    #[test]
    fn patch_operation_serializes_without_empty_members() {
        let mut fields = Map::new();
        fields.insert("System.State".to_string(), json!("Closed"));
        let serialized = serde_json::to_value(field_patch_operations(&fields)).unwrap();
        assert_eq!(
            serialized,
            json!([{"op": "add", "path": "/fields/System.State", "value": "Closed"}])
        );
    }

    #[test]
    fn empty_field_map_yields_no_operations() {
        assert!(field_patch_operations(&Map::new()).is_empty());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `{"count": n, "value": [...]}` envelope most list endpoints return.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkItem {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<u32>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<WorkItemRelation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WorkItem {
    fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn work_item_type(&self) -> Option<&str> {
        self.field_str("System.WorkItemType")
    }

    pub fn state(&self) -> Option<&str> {
        self.field_str("System.State")
    }

    pub fn title(&self) -> Option<&str> {
        self.field_str("System.Title")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkItemRelation {
    pub rel: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WiqlQuery {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WiqlResponse {
    #[serde(rename = "workItems", default)]
    pub work_items: Vec<WorkItemReference>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkItemReference {
    pub id: u32,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityRef {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "uniqueName", default)]
    pub unique_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<IdentityRef>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentListResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

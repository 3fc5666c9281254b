//! Two-level status snapshot of a work item: its hierarchy children and, for
//! each child, the work items blocking it.
//!
//! Every fetch is sequential and any failure aborts the whole summary. There is
//! no deduplication: a child reachable through two relations appears twice.

use crate::azure::client::{AzureDevOpsClient, AzureError};
use crate::azure::models::{WorkItem, WorkItemRelation};
use crate::azure::work_items;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RE_TRAILING_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\d+)/?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    HierarchyForward,
    HierarchyReverse,
    DependencyForward,
    DependencyReverse,
    Related,
}

impl RelationKind {
    pub fn reference_name(self) -> &'static str {
        match self {
            RelationKind::HierarchyForward => "System.LinkTypes.Hierarchy-Forward",
            RelationKind::HierarchyReverse => "System.LinkTypes.Hierarchy-Reverse",
            RelationKind::DependencyForward => "System.LinkTypes.Dependency-Forward",
            RelationKind::DependencyReverse => "System.LinkTypes.Dependency-Reverse",
            RelationKind::Related => "System.LinkTypes.Related",
        }
    }
}

/// Id of the work item a relation points at: the last path segment of its URL.
pub fn relation_target_id(relation: &WorkItemRelation) -> Result<u32, AzureError> {
    RE_TRAILING_ID
        .captures(&relation.url)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| AzureError::InvalidRelation(relation.url.clone()))
}

/// Target ids of the relations of `kind`, in the order the service listed them.
pub fn related_ids(
    relations: &[WorkItemRelation],
    kind: RelationKind,
) -> Result<Vec<u32>, AzureError> {
    relations
        .iter()
        .filter(|relation| relation.rel == kind.reference_name())
        .map(relation_target_id)
        .collect()
}

/// Read access to work items, so the summarizer can run against the REST
/// client or a test double.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait WorkItemStore: Send + Sync {
    async fn fetch_work_item(&self, project: &str, id: u32) -> Result<WorkItem, AzureError>;

    async fn fetch_relations(
        &self,
        project: &str,
        id: u32,
    ) -> Result<Vec<WorkItemRelation>, AzureError>;
}

#[async_trait]
impl WorkItemStore for AzureDevOpsClient {
    async fn fetch_work_item(&self, project: &str, id: u32) -> Result<WorkItem, AzureError> {
        work_items::get_work_item(self, project, id).await
    }

    async fn fetch_relations(
        &self,
        project: &str,
        id: u32,
    ) -> Result<Vec<WorkItemRelation>, AzureError> {
        work_items::get_work_item_relations(self, project, id).await
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChildSummary {
    #[serde(flatten)]
    pub work_item: WorkItem,
    pub blocked_by: Vec<WorkItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkItemSummary {
    pub work_item: WorkItem,
    pub children: Vec<ChildSummary>,
}

async fn fetch_related<S: WorkItemStore + ?Sized>(
    store: &S,
    project: &str,
    id: u32,
    kind: RelationKind,
) -> Result<Vec<WorkItem>, AzureError> {
    let relations = store.fetch_relations(project, id).await?;
    let mut items = Vec::new();
    for target in related_ids(&relations, kind)? {
        items.push(store.fetch_work_item(project, target).await?);
    }
    Ok(items)
}

pub async fn summarize_work_item_status<S: WorkItemStore + ?Sized>(
    store: &S,
    project: &str,
    id: u32,
) -> Result<WorkItemSummary, AzureError> {
    let work_item = store.fetch_work_item(project, id).await?;
    let children = fetch_related(store, project, id, RelationKind::HierarchyForward).await?;
    log::debug!(
        "{} {} '{}' ({}) has {} children",
        work_item.work_item_type().unwrap_or("Work item"),
        id,
        work_item.title().unwrap_or_default(),
        work_item.state().unwrap_or("unknown state"),
        children.len()
    );

    let mut summaries = Vec::with_capacity(children.len());
    for child in children {
        let blocked_by =
            fetch_related(store, project, child.id, RelationKind::DependencyForward).await?;
        summaries.push(ChildSummary {
            work_item: child,
            blocked_by,
        });
    }

    Ok(WorkItemSummary {
        work_item,
        children: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use serde_json::{Map, json};

    fn item(id: u32) -> WorkItem {
        let mut fields = Map::new();
        fields.insert("System.WorkItemType".to_string(), json!("Task"));
        fields.insert("System.State".to_string(), json!("Active"));
        fields.insert("System.Title".to_string(), json!(format!("Item {}", id)));
        WorkItem {
            id,
            rev: Some(1),
            fields,
            relations: None,
            url: None,
        }
    }

    fn relation(kind: RelationKind, target: u32) -> WorkItemRelation {
        WorkItemRelation {
            rel: kind.reference_name().to_string(),
            url: format!("https://dev.azure.com/contoso/_apis/wit/workItems/{}", target),
            attributes: None,
        }
    }

    fn upstream_404() -> AzureError {
        AzureError::UpstreamRequestFailed {
            status: 404,
            body: "TF401232: Work item does not exist".to_string(),
        }
    }

    #[test]
    fn target_id_is_the_last_path_segment() {
        let rel = relation(RelationKind::Related, 4711);
        assert_eq!(relation_target_id(&rel).unwrap(), 4711);

        let bad = WorkItemRelation {
            rel: "ArtifactLink".to_string(),
            url: "vstfs:///Git/Commit/abc".to_string(),
            attributes: None,
        };
        assert!(matches!(
            relation_target_id(&bad),
            Err(AzureError::InvalidRelation(_))
        ));
    }

    #[test]
    fn related_ids_filters_by_kind_and_keeps_order() {
        let relations = vec![
            relation(RelationKind::HierarchyForward, 3),
            relation(RelationKind::HierarchyReverse, 1),
            relation(RelationKind::DependencyForward, 9),
            relation(RelationKind::HierarchyForward, 2),
        ];
        assert_eq!(
            related_ids(&relations, RelationKind::HierarchyForward).unwrap(),
            vec![3, 2]
        );
        assert_eq!(
            related_ids(&relations, RelationKind::DependencyForward).unwrap(),
            vec![9]
        );
    }

    #[tokio::test]
    async fn no_children_means_no_further_fetches() {
        let mut store = MockWorkItemStore::new();
        store
            .expect_fetch_work_item()
            .times(1)
            .returning(|_, id| Ok(item(id)));
        store
            .expect_fetch_relations()
            .times(1)
            .returning(|_, _| Ok(vec![relation(RelationKind::HierarchyReverse, 1)]));

        let summary = summarize_work_item_status(&store, "Proj", 100).await.unwrap();
        assert_eq!(summary.work_item.id, 100);
        assert!(summary.children.is_empty());
    }

    #[tokio::test]
    async fn children_are_annotated_with_their_blockers() {
        let mut store = MockWorkItemStore::new();
        store
            .expect_fetch_relations()
            .withf(|_, id| *id == 100)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    relation(RelationKind::HierarchyForward, 101),
                    relation(RelationKind::HierarchyForward, 102),
                ])
            });
        store
            .expect_fetch_relations()
            .withf(|_, id| *id == 101)
            .times(1)
            .returning(|_, _| Ok(vec![relation(RelationKind::DependencyForward, 201)]));
        store
            .expect_fetch_relations()
            .withf(|_, id| *id == 102)
            .times(1)
            .returning(|_, _| Ok(vec![]));
        // 1 root + 2 children + 1 blocker
        store
            .expect_fetch_work_item()
            .times(4)
            .returning(|_, id| Ok(item(id)));

        let summary = summarize_work_item_status(&store, "Proj", 100).await.unwrap();
        let children: Vec<(u32, Vec<u32>)> = summary
            .children
            .iter()
            .map(|c| (c.work_item.id, c.blocked_by.iter().map(|b| b.id).collect()))
            .collect();
        assert_eq!(children, vec![(101, vec![201]), (102, vec![])]);
    }

    #[tokio::test]
    async fn fetches_run_in_relation_order() {
        let mut seq = Sequence::new();
        let mut store = MockWorkItemStore::new();
        store
            .expect_fetch_work_item()
            .withf(|_, id| *id == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, id| Ok(item(id)));
        store
            .expect_fetch_relations()
            .withf(|_, id| *id == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(vec![
                    relation(RelationKind::HierarchyForward, 3),
                    relation(RelationKind::HierarchyForward, 2),
                ])
            });
        for child in [3u32, 2] {
            store
                .expect_fetch_work_item()
                .withf(move |_, id| *id == child)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, id| Ok(item(id)));
        }
        for child in [3u32, 2] {
            store
                .expect_fetch_relations()
                .withf(move |_, id| *id == child)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(vec![]));
        }

        let summary = summarize_work_item_status(&store, "Proj", 1).await.unwrap();
        let ids: Vec<u32> = summary.children.iter().map(|c| c.work_item.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn failing_child_fetch_aborts_the_summary() {
        let mut store = MockWorkItemStore::new();
        store
            .expect_fetch_work_item()
            .withf(|_, id| *id == 100)
            .returning(|_, id| Ok(item(id)));
        store
            .expect_fetch_work_item()
            .withf(|_, id| *id == 102)
            .times(1)
            .returning(|_, _| Err(upstream_404()));
        store
            .expect_fetch_relations()
            .withf(|_, id| *id == 100)
            .returning(|_, _| {
                Ok(vec![
                    relation(RelationKind::HierarchyForward, 102),
                    relation(RelationKind::HierarchyForward, 103),
                ])
            });

        let err = summarize_work_item_status(&store, "Proj", 100)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn duplicate_relations_are_fetched_twice() {
        let mut store = MockWorkItemStore::new();
        store
            .expect_fetch_relations()
            .withf(|_, id| *id == 10)
            .returning(|_, _| {
                Ok(vec![
                    relation(RelationKind::HierarchyForward, 11),
                    relation(RelationKind::HierarchyForward, 11),
                ])
            });
        store
            .expect_fetch_relations()
            .withf(|_, id| *id == 11)
            .times(2)
            .returning(|_, _| Ok(vec![]));
        store
            .expect_fetch_work_item()
            .times(3)
            .returning(|_, id| Ok(item(id)));

        let summary = summarize_work_item_status(&store, "Proj", 10).await.unwrap();
        assert_eq!(summary.children.len(), 2);
    }

    #[test]
    fn child_summary_serializes_blockers_beside_the_work_item() {
        let child = ChildSummary {
            work_item: item(101),
            blocked_by: vec![item(201)],
        };
        let value = serde_json::to_value(&child).unwrap();
        assert_eq!(value["id"], json!(101));
        assert_eq!(value["blocked_by"][0]["id"], json!(201));
    }
}

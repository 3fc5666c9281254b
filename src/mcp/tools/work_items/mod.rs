// Work Items module
pub mod add_work_item_comment;
pub mod create_work_item;
pub mod get_work_item;
pub mod get_work_item_by_title;
pub mod get_work_items_batch_by_ids;
pub mod link_work_items;
pub mod list_work_item_comments;
pub mod my_work_items;
pub mod query_work_items_by_wiql;
pub mod summarize_work_item_status;
pub mod update_work_item;

// Re-export the public items
pub use add_work_item_comment::{AddWorkItemCommentArgs, add_work_item_comment};
pub use create_work_item::{CreateWorkItemArgs, create_work_item};
pub use get_work_item::{GetWorkItemArgs, get_work_item};
pub use get_work_item_by_title::{GetWorkItemByTitleArgs, get_work_item_by_title};
pub use get_work_items_batch_by_ids::{GetWorkItemsBatchByIdsArgs, get_work_items_batch_by_ids};
pub use link_work_items::{LinkWorkItemsArgs, link_work_items};
pub use list_work_item_comments::{ListWorkItemCommentsArgs, list_work_item_comments};
pub use my_work_items::{MyWorkItemsArgs, my_work_items};
pub use query_work_items_by_wiql::{QueryWorkItemsByWiqlArgs, query_work_items_by_wiql};
pub use summarize_work_item_status::{
    SummarizeWorkItemStatusArgs, summarize_work_item_status,
};
pub use update_work_item::{UpdateWorkItemArgs, update_work_item};

use crate::mcp::registry::ToolRegistry;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "my_work_items",
        "Get the IDs of the work items assigned to the authenticated user",
        my_work_items,
    );
    registry.register(
        "query_work_items_by_wiql",
        "Query work items using WIQL (Work Item Query Language)",
        query_work_items_by_wiql,
    );
    registry.register(
        "get_work_item",
        "Retrieve a single work item by ID",
        get_work_item,
    );
    registry.register(
        "get_work_items_batch_by_ids",
        "Retrieve multiple work items by their IDs",
        get_work_items_batch_by_ids,
    );
    registry.register(
        "get_work_item_by_title",
        "Find the ID of the first work item whose title matches exactly",
        get_work_item_by_title,
    );
    registry.register(
        "create_work_item",
        "Create a new work item from a map of field reference names to values (e.g. {\"System.Title\": \"New Task\"})",
        create_work_item,
    );
    registry.register(
        "update_work_item",
        "Update an existing work item by ID from a map of field reference names to values (e.g. {\"System.State\": \"Closed\"})",
        update_work_item,
    );
    registry.register(
        "link_work_items",
        "Link two work items (child, parent, blocker, related, duplicate)",
        link_work_items,
    );
    registry.register(
        "list_work_item_comments",
        "List comments for a specific work item",
        list_work_item_comments,
    );
    registry.register(
        "add_work_item_comment",
        "Add a comment to a specific work item",
        add_work_item_comment,
    );
    registry.register(
        "summarize_work_item_status",
        "Summarize a work item with its child items and what blocks each child",
        summarize_work_item_status,
    );
}

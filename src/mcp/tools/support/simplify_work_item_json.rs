use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static RE_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").unwrap());
static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[image\]").unwrap());

const FIELD_PREFIXES: [&str; 5] = [
    "System.",
    "Microsoft.VSTS.Common.",
    "Microsoft.VSTS.Scheduling.",
    "Microsoft.VSTS.CMMI.",
    "Microsoft.VSTS.TCM.",
];

const HTML_FIELDS: [&str; 4] = ["Description", "AcceptanceCriteria", "ReproSteps", "History"];

const DROPPED_FIELDS: [&str; 6] = [
    "BoardColumnDone",
    "CommentCount",
    "Watermark",
    "AuthorizedAs",
    "AuthorizedDate",
    "PersonId",
];

/// Converts Azure DevOps rich text to compact plain text.
pub fn html_to_text(html: &str) -> String {
    let text = html2text::from_read(html.as_bytes(), usize::MAX)
        .unwrap_or_else(|_| html.to_string())
        .replace('\r', "\n");
    let text = RE_IMAGE.replace_all(&text, "");
    let text = RE_SPACES.replace_all(&text, " ");
    let text = RE_NEWLINES.replace_all(&text, "\n");
    text.trim().to_string()
}

fn short_field_name(key: &str) -> String {
    if key.contains("_Kanban.Column") {
        return "Column".to_string();
    }
    if key.contains("_Kanban.Lane") {
        return "Lane".to_string();
    }
    FIELD_PREFIXES
        .iter()
        .find_map(|prefix| key.strip_prefix(prefix))
        .unwrap_or(key)
        .to_string()
}

fn simplify_field(key: &str, value: Value) -> Value {
    // Identity fields collapse to "Name <unique name>"
    if let Value::Object(obj) = &value
        && let Some(Value::String(name)) = obj.get("displayName")
    {
        return match obj.get("uniqueName") {
            Some(Value::String(unique)) if !unique.is_empty() => {
                Value::String(format!("{} <{}>", name, unique))
            }
            _ => Value::String(name.clone()),
        };
    }

    if let Value::String(html) = &value
        && HTML_FIELDS.contains(&key)
    {
        return Value::String(html_to_text(html));
    }

    value
}

/// Recursively trims work item JSON for LLM consumption: drops `url` and
/// `_links`, flattens `fields` to the top level with short names, collapses
/// identities and converts rich text fields to plain text.
pub fn simplify_work_item_json(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("url");
            map.remove("_links");
            map.remove("descriptor");
            map.remove("imageUrl");
            map.remove("avatar");

            if let Some(Value::Object(fields)) = map.remove("fields") {
                let mut simplified = Map::new();
                for (key, val) in fields {
                    let short = short_field_name(&key);
                    if DROPPED_FIELDS.contains(&short.as_str()) {
                        continue;
                    }
                    let val = simplify_field(&short, val);
                    // First occurrence wins when two long names shorten alike
                    simplified.entry(short).or_insert(val);
                }
                for (k, v) in simplified {
                    map.entry(k).or_insert(v);
                }
            }

            for (_, v) in map.iter_mut() {
                simplify_work_item_json(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                simplify_work_item_json(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_fields_and_strips_links() {
        let mut item = json!({
            "id": 42,
            "url": "https://dev.azure.com/contoso/_apis/wit/workItems/42",
            "_links": {"self": {}},
            "fields": {
                "System.Title": "Broken build",
                "System.State": "Active",
                "System.WorkItemType": "Bug",
                "Microsoft.VSTS.Common.Priority": 2,
                "System.AssignedTo": {"displayName": "Ana", "uniqueName": "ana@contoso.com"},
                "WEF_123_Kanban.Column": "Doing",
                "System.CommentCount": 3
            }
        });
        simplify_work_item_json(&mut item);
        assert_eq!(
            item,
            json!({
                "id": 42,
                "Title": "Broken build",
                "State": "Active",
                "WorkItemType": "Bug",
                "Priority": 2,
                "AssignedTo": "Ana <ana@contoso.com>",
                "Column": "Doing"
            })
        );
    }

    #[test]
    fn rich_text_fields_become_plain_text() {
        let mut item = json!({
            "id": 1,
            "fields": {"System.Description": "<div>Steps:</div><div>  run   it [image]</div>"}
        });
        simplify_work_item_json(&mut item);
        let text = item["Description"].as_str().unwrap();
        assert!(text.starts_with("Steps:"));
        assert!(text.contains("run it"));
        assert!(!text.contains('<'));
        assert!(!text.to_lowercase().contains("[image]"));
    }

    #[test]
    fn nested_work_items_are_simplified() {
        let mut summary = json!({
            "work_item": {"id": 1, "fields": {"System.Title": "Epic"}},
            "children": [{"id": 2, "fields": {"System.Title": "Story"}, "blocked_by": [
                {"id": 3, "url": "x", "fields": {"System.State": "New"}}
            ]}]
        });
        simplify_work_item_json(&mut summary);
        assert_eq!(summary["work_item"]["Title"], json!("Epic"));
        assert_eq!(summary["children"][0]["Title"], json!("Story"));
        assert_eq!(summary["children"][0]["blocked_by"][0], json!({"id": 3, "State": "New"}));
    }
}

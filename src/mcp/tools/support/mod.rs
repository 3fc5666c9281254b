// Support module for shared utility functions
mod deserialize_non_empty_string;
mod simplify_work_item_json;
mod tool_result;

pub use deserialize_non_empty_string::{
    deserialize_non_blank_string, deserialize_non_empty_string,
    deserialize_optional_non_empty_string,
};
pub use simplify_work_item_json::{html_to_text, simplify_work_item_json};
pub use tool_result::{azure_error_result, json_result, to_tool_result};

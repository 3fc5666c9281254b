use crate::azure::client::AzureError;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, ErrorCode},
};
use serde::Serialize;
use serde_json::json;

/// Successful tool result carrying `value` as pretty-printed JSON text.
pub fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| McpError {
        code: ErrorCode(-32000),
        message: format!("Failed to serialize result: {}", e).into(),
        data: None,
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Tool-level error result. Every domain failure is reported this way so the
/// agent sees `{"error": kind, "message": ..., "status"?: ...}` with
/// `isError: true`.
pub fn azure_error_result(tool: &str, err: &AzureError) -> CallToolResult {
    log::warn!("Tool {} failed: {}", tool, err);
    let mut payload = json!({
        "error": err.kind(),
        "message": err.to_string(),
    });
    if let Some(status) = err.status() {
        payload["status"] = json!(status);
    }
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| err.to_string());
    CallToolResult::error(vec![Content::text(text)])
}

/// Maps a wrapper outcome to a tool result, shaping successes with `shape`.
pub fn to_tool_result<T, R: Serialize>(
    tool: &str,
    result: Result<T, AzureError>,
    shape: impl FnOnce(T) -> R,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => json_result(&shape(value)),
        Err(err) => Ok(azure_error_result(tool, &err)),
    }
}

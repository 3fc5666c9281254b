//! Explicit tool registry: every tool is added once during startup with a
//! name, a description, an input schema and an async handler.

use crate::azure::client::AzureDevOpsClient;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, ErrorCode, JsonObject, Tool},
    schemars::{self, JsonSchema},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

pub type ToolFuture = BoxFuture<'static, Result<CallToolResult, McpError>>;

/// Type-erased handler: takes the shared client and the raw argument object.
pub type ToolHandler =
    Arc<dyn Fn(Arc<AzureDevOpsClient>, JsonObject) -> ToolFuture + Send + Sync>;

#[derive(Clone)]
struct RegisteredTool {
    tool: Tool,
    handler: ToolHandler,
}

#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

/// JSON schema of a tool's argument struct, as an MCP input schema object.
pub fn input_schema_for<A: JsonSchema>() -> JsonObject {
    let schema = schemars::schema_for!(A);
    match serde_json::to_value(schema) {
        Ok(Value::Object(mut map)) => {
            map.remove("$schema");
            map
        }
        _ => {
            let mut map = JsonObject::new();
            map.insert("type".to_string(), Value::String("object".to_string()));
            map
        }
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler whose arguments deserialize into `A`; the input
    /// schema is derived from `A`.
    pub fn register<A, F, Fut>(
        &mut self,
        name: &'static str,
        description: &'static str,
        handler: F,
    ) where
        A: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(Arc<AzureDevOpsClient>, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<CallToolResult, McpError>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        let erased: ToolHandler = Arc::new(move |client, arguments| {
            let handler = Arc::clone(&handler);
            Box::pin(async move {
                let args: A = serde_json::from_value(Value::Object(arguments)).map_err(|e| {
                    McpError {
                        code: ErrorCode(-32602),
                        message: format!("Invalid arguments for {}: {}", name, e).into(),
                        data: None,
                    }
                })?;
                handler(client, args).await
            })
        });
        self.register_with_schema(name, description, input_schema_for::<A>(), erased);
    }

    /// Raw registration with an explicit schema. Re-registering a name
    /// replaces the earlier entry.
    pub fn register_with_schema(
        &mut self,
        name: &'static str,
        description: &'static str,
        schema: JsonObject,
        handler: ToolHandler,
    ) {
        let entry = RegisteredTool {
            tool: Tool::new(name, description, Arc::new(schema)),
            handler,
        };
        match self.index.get(name) {
            Some(&position) => {
                log::warn!("Tool {} registered twice, replacing the earlier handler", name);
                self.tools[position] = entry;
            }
            None => {
                self.index.insert(name.to_string(), self.tools.len());
                self.tools.push(entry);
            }
        }
    }

    /// Tool descriptors in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|entry| entry.tool.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub async fn call(
        &self,
        name: &str,
        client: Arc<AzureDevOpsClient>,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let entry = self
            .index
            .get(name)
            .map(|&position| &self.tools[position])
            .ok_or_else(|| McpError {
                code: ErrorCode(-32601),
                message: format!("Unknown tool: {}", name).into(),
                data: None,
            })?;
        (entry.handler)(client, arguments.unwrap_or_default()).await
    }
}

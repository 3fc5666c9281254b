use crate::azure::client::AzureDevOpsClient;
use crate::mcp::registry::ToolRegistry;
use crate::mcp::tools;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AzureMcpServer {
    client: Arc<AzureDevOpsClient>,
    registry: Arc<ToolRegistry>,
}

impl AzureMcpServer {
    /// Server exposing every Azure DevOps tool.
    pub fn new(client: AzureDevOpsClient) -> Self {
        let mut registry = ToolRegistry::new();
        tools::register_tools(&mut registry);
        Self::with_registry(client, registry)
    }

    pub fn with_registry(client: AzureDevOpsClient, registry: ToolRegistry) -> Self {
        log::debug!("Registered {} tools", registry.len());
        Self {
            client: Arc::new(client),
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl ServerHandler for AzureMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "azure-devops-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: Some("Azure DevOps MCP".into()),
                website_url: None,
            },
            instructions: Some(
                "Use these tools to work with Azure DevOps projects, teams, iterations, work items, builds and pipeline runs".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.registry
            .call(&request.name, Arc::clone(&self.client), request.arguments)
            .await
    }
}

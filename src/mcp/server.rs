//! MCP server over the todo tool registry, mounted into the HTTP app.

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

use crate::application::todo_service::TodoService;

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::register_todo_tools;

/// Server instructions displayed to MCP clients
const SERVER_INSTRUCTIONS: &str =
    "Manage a shared todo list: list, fetch, create, update, and delete items by id.";

/// MCP server exposing the five todo operations as callable tools.
#[derive(Clone)]
pub struct TodoMcpServer {
    registry: Arc<ToolRegistry>,
    context: ToolContext,
}

impl TodoMcpServer {
    pub fn new(service: Arc<dyn TodoService>) -> Self {
        let mut registry = ToolRegistry::new();
        register_todo_tools(&mut registry);
        Self {
            registry: Arc::new(registry),
            context: ToolContext::new(service),
        }
    }
}

fn create_server_capabilities() -> ServerCapabilities {
    ServerCapabilities::builder()
        .enable_tools_with(ToolsCapability {
            list_changed: Some(false),
        })
        .build()
}

fn create_server_implementation() -> Implementation {
    Implementation::new("todo-api", env!("CARGO_PKG_VERSION"))
        .with_title("Todo API MCP Server")
}

impl ServerHandler for TodoMcpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult::new(create_server_capabilities())
            .with_server_info(create_server_implementation())
            .with_instructions(SERVER_INSTRUCTIONS))
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = %request.name, "call_tool");

        let tool = self.registry.get_tool(&request.name).ok_or_else(|| {
            McpError::invalid_request(format!("Unknown tool: {}", request.name), None)
        })?;

        let arguments = request.arguments.unwrap_or_default();
        tool.execute(arguments, &self.context).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(create_server_capabilities())
            .with_server_info(create_server_implementation())
            .with_instructions(SERVER_INSTRUCTIONS)
    }
}

/// Nest the MCP transport under `/mcp` in the given router. Tool calls are
/// forwarded 1:1 to the same service the HTTP routes use.
pub fn mount(router: axum::Router, service: Arc<dyn TodoService>) -> axum::Router {
    let server = TodoMcpServer::new(service);
    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    router.nest_service("/mcp", mcp_service)
}

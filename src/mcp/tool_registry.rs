//! Registry pattern for MCP tools: each tool is self-contained and looked
//! up by name, so the server's `call_tool` stays a plain dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};

use crate::application::todo_service::TodoService;

/// Context shared by all tools during execution. Tools are stateless; the
/// service handle is the only dependency they get.
#[derive(Clone)]
pub struct ToolContext {
    pub service: Arc<dyn TodoService>,
}

impl ToolContext {
    pub fn new(service: Arc<dyn TodoService>) -> Self {
        Self { service }
    }
}

/// Interface every agent-callable tool implements.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name, stable across versions.
    fn name(&self) -> &'static str;

    /// Human-readable description shown in tool listings.
    fn description(&self) -> &'static str;

    /// JSON Schema for the tool's arguments.
    fn schema(&self) -> serde_json::Value;

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError>;
}

/// Central name-to-tool map backing `list_tools`/`call_tool`.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// All registered tools as `Tool` objects for the list_tools response.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool::new(tool.name(), tool.description(), Arc::new(schema_map))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Shared helpers for tool implementations.
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Wrap text content in a success response.
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult::success(vec![Annotated::new(
            RawContent::Text(RawTextContent {
                text: content.into(),
                meta: None,
            }),
            None,
        )])
    }
}

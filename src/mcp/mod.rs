//! Agent-tool binding: re-exposes the five todo operations as MCP tools.

pub mod server;
pub mod tool_registry;
pub mod tools;

pub use server::{mount, TodoMcpServer};
pub use tool_registry::{McpTool, ToolContext, ToolRegistry};

//! The five todo tools. Each is a thin adapter over `TodoService`; none
//! carries logic of its own beyond argument parsing and result shaping.

use async_trait::async_trait;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::json;

use crate::domain::error::TodoError;
use crate::domain::todo::{CreateTodo, Todo, UpdateTodo};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};

/// Register all five todo tools.
pub fn register_todo_tools(registry: &mut ToolRegistry) {
    registry.register(GetAllTodosTool);
    registry.register(GetTodoTool);
    registry.register(CreateTodoTool);
    registry.register(UpdateTodoTool);
    registry.register(DeleteTodoTool);
}

fn to_mcp_error(err: TodoError) -> McpError {
    match &err {
        TodoError::NotFound { .. } | TodoError::Validation(_) => {
            McpError::invalid_params(err.to_string(), None)
        }
        TodoError::Storage(_) => McpError::internal_error(err.to_string(), None),
    }
}

fn todo_response(todo: &Todo) -> CallToolResult {
    BaseToolImpl::create_success_response(
        json!({
            "todo_id": todo.todo_id,
            "content": todo.content,
            "completed": todo.completed,
        })
        .to_string(),
    )
}

#[derive(Debug, Deserialize)]
struct TodoIdArgs {
    todo_id: i64,
}

#[derive(Debug, Deserialize)]
struct UpdateTodoArgs {
    todo_id: i64,
    content: Option<String>,
    completed: Option<bool>,
}

#[derive(Default)]
pub struct GetAllTodosTool;

#[async_trait]
impl McpTool for GetAllTodosTool {
    fn name(&self) -> &'static str {
        "get_all_todos"
    }

    fn description(&self) -> &'static str {
        "Retrieve a list of all todo items from the database"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let todos = context.service.list().await.map_err(to_mcp_error)?;
        Ok(BaseToolImpl::create_success_response(
            json!(todos).to_string(),
        ))
    }
}

#[derive(Default)]
pub struct GetTodoTool;

#[async_trait]
impl McpTool for GetTodoTool {
    fn name(&self) -> &'static str {
        "get_todo"
    }

    fn description(&self) -> &'static str {
        "Retrieve a single todo item by its ID"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "todo_id": {
                    "type": "integer",
                    "description": "The unique identifier of the todo item"
                }
            },
            "required": ["todo_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let args: TodoIdArgs = BaseToolImpl::parse_arguments(arguments)?;
        let todo = context.service.get(args.todo_id).await.map_err(to_mcp_error)?;
        Ok(todo_response(&todo))
    }
}

#[derive(Default)]
pub struct CreateTodoTool;

#[async_trait]
impl McpTool for CreateTodoTool {
    fn name(&self) -> &'static str {
        "create_todo"
    }

    fn description(&self) -> &'static str {
        "Create a new todo item in the database"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The todo item content",
                    "minLength": 1
                },
                "completed": {
                    "type": "boolean",
                    "description": "Whether the todo is completed",
                    "default": false
                }
            },
            "required": ["content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let input: CreateTodo = BaseToolImpl::parse_arguments(arguments)?;
        let todo = context.service.create(input).await.map_err(to_mcp_error)?;
        Ok(todo_response(&todo))
    }
}

#[derive(Default)]
pub struct UpdateTodoTool;

#[async_trait]
impl McpTool for UpdateTodoTool {
    fn name(&self) -> &'static str {
        "update_todo"
    }

    fn description(&self) -> &'static str {
        "Update an existing todo item by its ID (supports partial updates)"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "todo_id": {
                    "type": "integer",
                    "description": "The unique identifier of the todo item to update"
                },
                "content": {
                    "type": ["string", "null"],
                    "description": "The todo item content",
                    "minLength": 1
                },
                "completed": {
                    "type": ["boolean", "null"],
                    "description": "Whether the todo is completed"
                }
            },
            "required": ["todo_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let args: UpdateTodoArgs = BaseToolImpl::parse_arguments(arguments)?;
        let input = UpdateTodo {
            content: args.content,
            completed: args.completed,
        };
        let todo = context
            .service
            .update(args.todo_id, input)
            .await
            .map_err(to_mcp_error)?;
        Ok(todo_response(&todo))
    }
}

#[derive(Default)]
pub struct DeleteTodoTool;

#[async_trait]
impl McpTool for DeleteTodoTool {
    fn name(&self) -> &'static str {
        "delete_todo"
    }

    fn description(&self) -> &'static str {
        "Delete a todo item from the database by its ID"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "todo_id": {
                    "type": "integer",
                    "description": "The unique identifier of the todo item to delete"
                }
            },
            "required": ["todo_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let args: TodoIdArgs = BaseToolImpl::parse_arguments(arguments)?;
        context.service.delete(args.todo_id).await.map_err(to_mcp_error)?;
        // The HTTP route answers 204 No Content; the tool mirrors that.
        Ok(BaseToolImpl::create_success_response(""))
    }
}

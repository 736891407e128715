use async_trait::async_trait;

use super::error::TodoError;
use super::todo::{CreateTodo, Todo, UpdateTodo};

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> Result<(), TodoError>;
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn get(&self, id: i64) -> Result<Option<Todo>, TodoError>;
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;
    async fn update(&self, id: i64, input: UpdateTodo) -> Result<Option<Todo>, TodoError>;
    async fn delete(&self, id: i64) -> Result<bool, TodoError>;
}

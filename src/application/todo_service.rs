use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, UpdateTodo};
use async_trait::async_trait;

/// The single handler interface both transport bindings adapt to.
#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn get(&self, id: i64) -> Result<Todo, TodoError>;
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;
    async fn update(&self, id: i64, input: UpdateTodo) -> Result<Todo, TodoError>;
    async fn delete(&self, id: i64) -> Result<(), TodoError>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

fn require_content(content: &str) -> Result<(), TodoError> {
    if content.is_empty() {
        return Err(TodoError::Validation("content must not be empty".into()));
    }
    Ok(())
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> {
        require_content(&input.content)?;
        self.repo.create(input).await
    }

    async fn get(&self, id: i64) -> Result<Todo, TodoError> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound { id })
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoError> { self.repo.list().await }

    async fn update(&self, id: i64, input: UpdateTodo) -> Result<Todo, TodoError> {
        if let Some(content) = input.content.as_deref() {
            require_content(content)?;
        }
        self.repo.update(id, input).await?.ok_or(TodoError::NotFound { id })
    }

    async fn delete(&self, id: i64) -> Result<(), TodoError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(TodoError::NotFound { id })
        }
    }
}

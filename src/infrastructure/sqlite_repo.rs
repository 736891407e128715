use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{sqlite::{SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    error::TodoError,
    repository::TodoRepository,
    todo::{CreateTodo, Todo, UpdateTodo},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self, TodoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<(), TodoError> {
        // AUTOINCREMENT keeps ids of deleted rows from ever being reissued.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                todo_id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT 0
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> {
        let result = sqlx::query("INSERT INTO todos (content, completed) VALUES (?1, ?2)")
            .bind(&input.content)
            .bind(input.completed)
            .execute(&*self.pool)
            .await?;
        Ok(Todo {
            todo_id: result.last_insert_rowid(),
            content: input.content,
            completed: input.completed,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Todo>, TodoError> {
        let row = sqlx::query("SELECT todo_id, content, completed FROM todos WHERE todo_id = ?1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(row_to_todo))
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query("SELECT todo_id, content, completed FROM todos ORDER BY todo_id")
            .fetch_all(&*self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn update(&self, id: i64, input: UpdateTodo) -> Result<Option<Todo>, TodoError> {
        // Fetch existing, merge only the supplied fields, write back
        let existing = self.get(id).await?;
        let Some(mut todo) = existing else { return Ok(None) };

        if let Some(content) = input.content { todo.content = content; }
        if let Some(completed) = input.completed { todo.completed = completed; }

        sqlx::query("UPDATE todos SET content = ?2, completed = ?3 WHERE todo_id = ?1")
            .bind(todo.todo_id)
            .bind(&todo.content)
            .bind(todo.completed)
            .execute(&*self.pool)
            .await?;

        Ok(Some(todo))
    }

    async fn delete(&self, id: i64) -> Result<bool, TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE todo_id = ?1")
            .bind(id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_todo(row: SqliteRow) -> Todo {
    Todo {
        todo_id: row.get("todo_id"),
        content: row.get("content"),
        completed: row.get("completed"),
    }
}

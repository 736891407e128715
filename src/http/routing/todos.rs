use axum::http::StatusCode;
use axum::{extract::{Path, State}, routing::{get, post}, Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::error::TodoError;
use crate::domain::todo::{CreateTodo, Todo, UpdateTodo};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/:todo_id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, TodoError> {
    Ok(Json(state.service.list().await?))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(todo_id): Path<i64>,
) -> Result<Json<Todo>, TodoError> {
    Ok(Json(state.service.get(todo_id).await?))
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let todo = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(todo_id): Path<i64>,
    Json(payload): Json<UpdateTodo>,
) -> Result<Json<Todo>, TodoError> {
    Ok(Json(state.service.update(todo_id, payload).await?))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(todo_id): Path<i64>,
) -> Result<StatusCode, TodoError> {
    state.service.delete(todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Request handlers for the `/todos` routes.
//!
//! Each handler performs exactly one store call. Handlers taking an id run
//! `parse_id` before anything else, including body parsing.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;

use crate::error::ApiError;
use crate::model::{
    CreateTodo, NewTodo, Todo, TodoChanges, TodoEnvelope, TodoId, TodoList, UpdateTodo,
};
use crate::store::TodoStore;

/// The single id-format check shared by every `:id` route. A bad format is
/// reported as not-found, never as a bad request.
fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    TodoId::parse(raw).ok_or(ApiError::InvalidId)
}

pub async fn create_todo<S: TodoStore>(
    State(store): State<S>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload.inspect_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected create body");
    })?;
    let todo = store.create(NewTodo::from(input)).await.inspect_err(|err| {
        tracing::warn!(error = %err, "create failed");
    })?;
    tracing::info!(id = %todo.id, "todo created");
    Ok(Json(todo))
}

pub async fn list_todos<S: TodoStore>(State(store): State<S>) -> Result<Json<TodoList>, ApiError> {
    let todos = store.find_all().await?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(Json(TodoList { todos }))
}

pub async fn get_todo<S: TodoStore>(
    State(store): State<S>,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoEnvelope>, ApiError> {
    let id = parse_id(&raw_id)?;
    let todo = store
        .find_by_id(id)
        .await
        .map_err(|err| {
            tracing::error!(id = %id, error = %err, "lookup failed");
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound)?;
    tracing::debug!(id = %id, "fetched todo");
    Ok(Json(TodoEnvelope { todo }))
}

pub async fn update_todo<S: TodoStore>(
    State(store): State<S>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<TodoEnvelope>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload.inspect_err(|rejection| {
        tracing::warn!(id = %id, error = %rejection.body_text(), "rejected update body");
    })?;
    let changes = TodoChanges::from_update(input, Utc::now().timestamp_millis());
    let todo = store
        .update_by_id(id, changes)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::debug!(id = %id, completed = todo.completed, "todo updated");
    Ok(Json(TodoEnvelope { todo }))
}

pub async fn delete_todo<S: TodoStore>(
    State(store): State<S>,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoEnvelope>, ApiError> {
    let id = parse_id(&raw_id)?;
    let todo = store.delete_by_id(id).await?.ok_or(ApiError::NotFound)?;
    tracing::info!(id = %id, "todo deleted");
    Ok(Json(TodoEnvelope { todo }))
}

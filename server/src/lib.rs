//! HTTP API for a list of todos backed by a document store.
//!
//! # Overview
//! Five independent handlers under `/todos` translate requests into
//! `TodoStore` calls and serialize the results as JSON.
//!
//! # Design
//! - The store is injected through axum `State`; handlers are generic over
//!   `S: TodoStore` so tests can run them against a fake.
//! - `completedAt` is stamped or cleared by the update handler, not by the
//!   store.
//! - Every failure becomes a response through `ApiError`; nothing on the
//!   request path panics or leaves a request unanswered.

pub mod config;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod model;
pub mod store;

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use memory::MemoryStore;
pub use model::{CreateTodo, Todo, TodoEnvelope, TodoId, TodoList, UpdateTodo};
pub use store::{is_valid_id, StoreError, TodoStore};

/// Router over `store`.
pub fn router<S: TodoStore>(store: S) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<S>)
                .patch(handlers::update_todo::<S>)
                .delete(handlers::delete_todo::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Router over a fresh, empty `MemoryStore`.
pub fn app() -> Router {
    router(MemoryStore::new())
}

/// Serve `store` on `listener` until the process is killed.
pub async fn run<S: TodoStore>(listener: TcpListener, store: S) -> Result<(), std::io::Error> {
    axum::serve(listener, router(store)).await
}

/// Serve `store` on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn serve<S, F>(listener: TcpListener, store: S, shutdown: F) -> Result<(), std::io::Error>
where
    S: TodoStore,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await
}

//! Document store seam.
//!
//! Handlers only see `TodoStore`. The process builds one store at startup and
//! hands it to the router as state, so tests can swap in a fake.

use std::future::Future;

use thiserror::Error;

use crate::model::{NewTodo, Todo, TodoChanges, TodoId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A write was rejected by the store's field rules.
    #[error("validation failed: {field} {reason}")]
    Validation { field: &'static str, reason: String },

    /// The backend could not serve the call.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Validation { .. } => "ValidationError",
            StoreError::Backend(_) => "StoreError",
        }
    }
}

/// CRUD by id over todo documents. Lookups by id return `Ok(None)` when no
/// document matches.
pub trait TodoStore: Clone + Send + Sync + 'static {
    fn create(&self, fields: NewTodo) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    fn find_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    fn update_by_id(
        &self,
        id: TodoId,
        changes: TodoChanges,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    fn delete_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;
}

/// Whether `raw` has the shape of a store id.
pub fn is_valid_id(raw: &str) -> bool {
    TodoId::parse(raw).is_some()
}

/// Trim `text` and reject it when nothing is left.
pub(crate) fn validate_text(text: &str) -> Result<String, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation {
            field: "text",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id_predicate() {
        assert!(is_valid_id("00000000-0000-0000-0000-000000000001"));
        assert!(!is_valid_id("5bc6ff6611206ca13509133334"));
        assert!(!is_valid_id("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"));
    }

    #[test]
    fn validate_text_trims() {
        assert_eq!(validate_text("  buy milk ").unwrap(), "buy milk");
    }

    #[test]
    fn validate_text_rejects_blank() {
        let err = validate_text("   ").unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "text", .. }));
        assert_eq!(err.to_string(), "validation failed: text must not be empty");
    }
}

//! In-process document store.
//!
//! Documents live in a `Vec` behind an async `RwLock`, so `find_all` returns
//! them in insertion order. Every mutating call takes the write lock once;
//! concurrent writes to the same id are last-write-wins.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::{NewTodo, Todo, TodoChanges, TodoId};
use crate::store::{validate_text, StoreError, TodoStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

impl TodoStore for MemoryStore {
    async fn create(&self, fields: NewTodo) -> Result<Todo, StoreError> {
        let text = fields.text.ok_or_else(|| StoreError::Validation {
            field: "text",
            reason: "is required".to_string(),
        })?;
        let todo = Todo {
            id: TodoId::new(),
            text: validate_text(&text)?,
            completed: false,
            completed_at: None,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: TodoId,
        mut changes: TodoChanges,
    ) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        if let Some(text) = changes.text.take() {
            changes.text = Some(validate_text(&text)?);
        }
        changes.apply(todo);
        Ok(Some(todo.clone()))
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        let position = todos.iter().position(|todo| todo.id == id);
        Ok(position.map(|index| todos.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(text: &str) -> NewTodo {
        NewTodo {
            text: Some(text.to_string()),
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let store = MemoryStore::new();
        let todo = store.create(new_todo("Buy milk")).await.unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert!(todo.completed_at.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn create_requires_text() {
        let store = MemoryStore::new();
        let err = store.create(NewTodo::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "validation failed: text is required");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn create_rejects_blank_text() {
        let store = MemoryStore::new();
        let err = store.create(new_todo("  ")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = MemoryStore::new();
        store.create(new_todo("first")).await.unwrap();
        store.create(new_todo("second")).await.unwrap();
        store.create(new_todo("third")).await.unwrap();

        let texts: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.text)
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn find_by_id_missing_is_none() {
        let store = MemoryStore::new();
        store.create(new_todo("only")).await.unwrap();
        assert!(store.find_by_id(TodoId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_by_id_merges_fields() {
        let store = MemoryStore::new();
        let created = store.create(new_todo("draft")).await.unwrap();

        let changes = TodoChanges {
            text: Some(" final ".to_string()),
            completed: Some(true),
            completed_at: Some(Some(5)),
        };
        let updated = store.update_by_id(created.id, changes).await.unwrap().unwrap();
        assert_eq!(updated.text, "final");
        assert!(updated.completed);
        assert_eq!(updated.completed_at, Some(5));
        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_by_id_rejects_blank_text() {
        let store = MemoryStore::new();
        let created = store.create(new_todo("keep me")).await.unwrap();
        let changes = TodoChanges {
            text: Some(String::new()),
            ..TodoChanges::default()
        };
        assert!(store.update_by_id(created.id, changes).await.is_err());
        let stored = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.text, "keep me");
    }

    #[tokio::test]
    async fn update_by_id_missing_is_none() {
        let store = MemoryStore::new();
        let result = store
            .update_by_id(TodoId::new(), TodoChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn update_by_id_missing_wins_over_blank_text() {
        let store = MemoryStore::new();
        let changes = TodoChanges {
            text: Some(String::new()),
            ..TodoChanges::default()
        };
        let result = store.update_by_id(TodoId::new(), changes).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_by_id_returns_last_value() {
        let store = MemoryStore::new();
        let created = store.create(new_todo("gone soon")).await.unwrap();
        let deleted = store.delete_by_id(created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
        assert!(store.delete_by_id(created.id).await.unwrap().is_none());
    }
}

//! Todo entity, request payloads and response wrappers.
//!
//! # Design
//! Request payloads keep every field optional so that "omitted" and "set to
//! the zero value" stay distinguishable. The create payload's `text` is
//! optional too: a missing `text` must reach the store and fail its
//! validation rather than be rejected by the JSON extractor.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned identifier of a todo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a path segment into an id. Only the hyphenated form that ids
    /// are rendered in is accepted (case-insensitive), so each todo has a
    /// single path. `None` when the format is wrong.
    pub fn parse(raw: &str) -> Option<Self> {
        let uuid = Uuid::try_parse(raw).ok()?;
        let canonical = uuid.hyphenated().to_string();
        raw.eq_ignore_ascii_case(&canonical).then_some(Self(uuid))
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for TodoId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Milliseconds since the Unix epoch. Present iff `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Fields handed to the store on create.
#[derive(Clone, Debug, Default)]
pub struct NewTodo {
    pub text: Option<String>,
}

impl From<CreateTodo> for NewTodo {
    fn from(input: CreateTodo) -> Self {
        Self { text: input.text }
    }
}

/// Merge patch handed to the store on update. `None` leaves a field as is;
/// `completed_at: Some(None)` clears the timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<i64>>,
}

impl TodoChanges {
    /// Build the patch for an update request, stamping `completed_at` with
    /// `now_ms` when the todo becomes completed.
    pub fn from_update(input: UpdateTodo, now_ms: i64) -> Self {
        let completed_at = input
            .completed
            .map(|completed| completed.then_some(now_ms));
        Self {
            text: input.text,
            completed: input.completed,
            completed_at,
        }
    }

    pub fn apply(self, todo: &mut Todo) {
        if let Some(text) = self.text {
            todo.text = text;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(completed_at) = self.completed_at {
            todo.completed_at = completed_at;
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoEnvelope {
    pub todo: Todo,
}

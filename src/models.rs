//! Frontend Models
//!
//! Data structures persisted in the todo slot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque todo identifier, stored as a plain JSON string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A single todo entry.
///
/// Field order matches the layout already sitting in users' storage
/// (`{"text": ..., "id": ...}`); deserialization does not depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub text: String,
    pub id: TodoId,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id,
        }
    }
}

/// Todos in display order (insertion order)
pub type TodoList = Vec<Todo>;

//! Persisted Slot
//!
//! Key-value storage backends and the JSON codec for the todo slot.
//! The slot always holds a JSON array of `{text, id}` records.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;
use crate::models::{Todo, TodoList};

/// Synchronous string key-value storage.
///
/// Mirrors the `window.localStorage` contract: reads of a missing key return
/// `Ok(None)`, writes overwrite.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` of the current browsing context.
///
/// The handle is looked up on every access so the type stays `Send + Sync`
/// and can live inside a reactive signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// In-process storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Codec
// ========================

pub fn encode_todos(todos: &[Todo]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(todos)?)
}

pub fn decode_todos(raw: &str) -> Result<TodoList, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read the slot, falling back to an empty list when it is absent or unreadable.
pub fn load_todos(storage: &impl KeyValueStorage, key: &str) -> TodoList {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("[STORAGE] No saved todos under {}", key);
            return TodoList::new();
        }
        Err(e) => {
            log::warn!("[STORAGE] Could not read {}: {}", key, e);
            return TodoList::new();
        }
    };

    match decode_todos(&raw) {
        Ok(todos) => {
            log::debug!("[STORAGE] Loaded {} todos from {}", todos.len(), key);
            todos
        }
        Err(e) => {
            log::warn!("[STORAGE] Ignoring unparseable {} slot: {}", key, e);
            TodoList::new()
        }
    }
}

/// Overwrite the slot with the full list.
pub fn save_todos(storage: &impl KeyValueStorage, key: &str, todos: &[Todo]) -> Result<(), StorageError> {
    let raw = encode_todos(todos)?;
    storage.set(key, &raw)
}

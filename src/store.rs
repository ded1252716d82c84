//! Todo Store
//!
//! Owns the authoritative todo list plus the ephemeral input/error state,
//! and rewrites the persisted slot after every mutation.

use crate::config::StoreConfig;
use crate::error::{StorageError, ValidationError};
use crate::ids::IdGenerator;
use crate::models::{Todo, TodoId, TodoList};
use crate::storage::{self, KeyValueStorage};

/// What the list area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState<'a> {
    /// Non-empty list, in display order
    List(&'a [Todo]),
    /// Empty list: the last validation message, or "" if none
    Message(&'a str),
}

pub struct TodoStore<S, G> {
    todos: TodoList,
    input: String,
    error_message: String,
    storage: S,
    ids: G,
    config: StoreConfig,
}

impl<S: KeyValueStorage, G: IdGenerator> TodoStore<S, G> {
    /// Build the store from whatever the slot currently holds.
    ///
    /// Never writes; an absent or corrupt slot just yields an empty list.
    pub fn initialize(storage: S, ids: G, config: StoreConfig) -> Self {
        let todos = storage::load_todos(&storage, &config.storage_key);
        log::info!("[STORE] Initialized with {} todos", todos.len());
        Self {
            todos,
            input: String::new(),
            error_message: String::new(),
            storage,
            ids,
            config,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append a todo with the given text.
    ///
    /// Only the exact empty string is rejected; whitespace is kept as typed.
    pub fn add(&mut self, text: &str) -> Result<Todo, ValidationError> {
        if text.is_empty() {
            self.error_message = ValidationError::Empty.to_string();
            log::debug!("[STORE] Rejected empty todo");
            return Err(ValidationError::Empty);
        }

        let todo = Todo::new(self.ids.generate_id(), text);
        self.todos.push(todo.clone());
        self.input.clear();
        if self.config.clear_error_on_add {
            self.error_message.clear();
        }
        log::debug!("[STORE] Added todo {}", todo.id);
        self.persist_logged();
        Ok(todo)
    }

    /// Add whatever is currently in the input field.
    pub fn submit(&mut self) -> Result<Todo, ValidationError> {
        let text = std::mem::take(&mut self.input);
        let result = self.add(&text);
        if result.is_err() {
            self.input = text;
        }
        result
    }

    /// Remove the todo with this id; unknown ids are ignored.
    pub fn delete(&mut self, id: &TodoId) {
        let before = self.todos.len();
        self.todos.retain(|todo| &todo.id != id);
        if self.todos.len() == before {
            log::debug!("[STORE] Delete of unknown todo {}", id);
        } else {
            log::debug!("[STORE] Deleted todo {}", id);
        }
        self.persist_logged();
    }

    pub fn delete_all(&mut self) {
        log::debug!("[STORE] Deleting all {} todos", self.todos.len());
        self.todos.clear();
        self.persist_logged();
    }

    /// Overwrite the persisted slot with the current list.
    pub fn persist(&self) -> Result<(), StorageError> {
        storage::save_todos(&self.storage, &self.config.storage_key, &self.todos)
    }

    pub fn display(&self) -> DisplayState<'_> {
        if self.todos.is_empty() {
            DisplayState::Message(&self.error_message)
        } else {
            DisplayState::List(&self.todos)
        }
    }

    // The in-memory list stays authoritative; the next mutation rewrites the whole slot.
    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            log::error!("[STORE] Failed to persist todos: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::storage::MemoryStorage;

    const KEY: &str = "TODOS";

    fn empty_store() -> TodoStore<MemoryStorage, SequentialIds> {
        TodoStore::initialize(MemoryStorage::new(), SequentialIds::new(), StoreConfig::default())
    }

    fn store_with(texts: &[&str]) -> TodoStore<MemoryStorage, SequentialIds> {
        let mut store = empty_store();
        for text in texts {
            store.add(text).unwrap();
        }
        store
    }

    fn slot(store: &TodoStore<MemoryStorage, SequentialIds>) -> Option<String> {
        store.storage().get(KEY).unwrap()
    }

    fn ids(store: &TodoStore<MemoryStorage, SequentialIds>) -> Vec<&str> {
        store.todos().iter().map(|t| t.id.as_str()).collect()
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    #[test]
    fn test_initialize_empty_storage() {
        let store = empty_store();
        assert!(store.todos().is_empty());
        assert_eq!(store.input(), "");
        assert_eq!(store.error_message(), "");
    }

    #[test]
    fn test_initialize_does_not_write() {
        let store = TodoStore::initialize(
            MemoryStorage::with_entry(KEY, "corrupt"),
            SequentialIds::new(),
            StoreConfig::default(),
        );
        assert!(store.todos().is_empty());
        assert_eq!(slot(&store).as_deref(), Some("corrupt"));
    }

    #[test]
    fn test_initialize_restores_saved_list() {
        let raw = r#"[{"text":"A","id":"1"},{"text":"B","id":"2"}]"#;
        let store = TodoStore::initialize(
            MemoryStorage::with_entry(KEY, raw),
            SequentialIds::new(),
            StoreConfig::default(),
        );
        assert_eq!(store.todos().len(), 2);
        assert_eq!(store.todos()[1].text, "B");
    }

    #[test]
    fn test_add_buy_milk() {
        let mut store = empty_store();
        store.set_input("Buy milk");

        let todo = store.submit().unwrap();

        assert_eq!(todo.text, "Buy milk");
        assert_eq!(store.todos(), &[todo.clone()]);
        assert_eq!(store.input(), "");
        assert_eq!(
            slot(&store),
            Some(format!(r#"[{{"text":"Buy milk","id":"{}"}}]"#, todo.id))
        );
    }

    #[test]
    fn test_add_empty_is_rejected() {
        let mut store = empty_store();

        assert_eq!(store.add(""), Err(ValidationError::Empty));
        assert!(store.todos().is_empty());
        assert_eq!(store.error_message(), "Todo cannot be empty!");
        assert_eq!(store.display(), DisplayState::Message("Todo cannot be empty!"));
        assert_eq!(slot(&store), None);
    }

    #[test]
    fn test_rejected_submit_keeps_input() {
        let mut store = store_with(&["A"]);
        store.set_input("");

        assert!(store.submit().is_err());
        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let mut store = empty_store();
        let todo = store.add("   ").unwrap();
        assert_eq!(todo.text, "   ");
        assert_eq!(store.todos().len(), 1);
    }

    #[test]
    fn test_add_appends_one_and_clears_input() {
        let mut store = store_with(&["A", "B"]);
        store.set_input("C");

        store.submit().unwrap();

        assert_eq!(store.todos().len(), 3);
        assert_eq!(store.todos()[2].text, "C");
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_duplicate_text_gets_distinct_ids() {
        let store = store_with(&["same", "same", "same"]);
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_delete_keeps_order_of_others() {
        let mut store = store_with(&["A", "B", "C"]);

        store.delete(&TodoId::from("2"));

        assert_eq!(ids(&store), vec!["1", "3"]);
        assert_eq!(store.todos()[1].text, "C");
        assert_eq!(
            slot(&store).as_deref(),
            Some(r#"[{"text":"A","id":"1"},{"text":"C","id":"3"}]"#)
        );
    }

    #[test]
    fn test_delete_first_of_two() {
        let mut store = store_with(&["A", "B"]);
        store.delete(&TodoId::from("1"));
        assert_eq!(store.todos(), &[Todo::new(TodoId::from("2"), "B")]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&["A", "B"]);
        let before = store.todos().to_vec();

        store.delete(&TodoId::from("missing"));

        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn test_delete_all_is_idempotent() {
        let mut store = store_with(&["A"]);

        store.delete_all();
        assert!(store.todos().is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));

        store.delete_all();
        assert!(store.todos().is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_slot_round_trips_after_mixed_operations() {
        let mut store = store_with(&["A", "B", "C", "D"]);
        store.delete(&TodoId::from("3"));
        store.add("E").unwrap();
        store.delete(&TodoId::from("1"));

        let raw = slot(&store).unwrap();
        assert_eq!(storage::decode_todos(&raw).unwrap(), store.todos());

        let reloaded = TodoStore::initialize(
            MemoryStorage::with_entry(KEY, &raw),
            SequentialIds::new(),
            StoreConfig::default(),
        );
        assert_eq!(reloaded.todos(), store.todos());
    }

    #[test]
    fn test_stale_error_reappears_when_list_empties() {
        let mut store = empty_store();
        store.add("").unwrap_err();
        let todo = store.add("A").unwrap();
        assert_eq!(store.display(), DisplayState::List(store.todos()));

        store.delete(&todo.id);

        assert_eq!(store.display(), DisplayState::Message("Todo cannot be empty!"));
    }

    #[test]
    fn test_clear_error_on_add() {
        let config = StoreConfig::default().with_clear_error_on_add(true);
        let mut store = TodoStore::initialize(MemoryStorage::new(), SequentialIds::new(), config);
        store.add("").unwrap_err();
        store.add("A").unwrap();
        store.delete_all();

        assert_eq!(store.display(), DisplayState::Message(""));
    }

    #[test]
    fn test_custom_storage_key() {
        let config = StoreConfig::default().with_storage_key("TODOS_V2");
        let mut store = TodoStore::initialize(MemoryStorage::new(), SequentialIds::new(), config);
        store.add("A").unwrap();

        assert!(store.storage().get("TODOS_V2").unwrap().is_some());
        assert!(store.storage().get(KEY).unwrap().is_none());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = TodoStore::initialize(ReadOnlyStorage, SequentialIds::new(), StoreConfig::default());

        store.add("A").unwrap();

        assert_eq!(store.todos().len(), 1);
        assert!(matches!(store.persist(), Err(StorageError::Write { .. })));
    }
}

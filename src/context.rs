//! Application Context
//!
//! The single reactive cell owning the todo store, shared via Leptos Context API.
//! Every action mutates the store through `update`, which notifies all views.

use leptos::prelude::*;

use crate::config::StoreConfig;
use crate::ids::UuidGenerator;
use crate::models::TodoId;
use crate::storage::BrowserStorage;
use crate::store::TodoStore;

/// Store type used in the browser
pub type AppStore = TodoStore<BrowserStorage, UuidGenerator>;

#[derive(Clone, Copy)]
pub struct AppContext {
    store: RwSignal<AppStore>,
}

impl AppContext {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            store: RwSignal::new(TodoStore::initialize(BrowserStorage, UuidGenerator, config)),
        }
    }

    /// Read-only access for views
    pub fn with<R>(&self, f: impl FnOnce(&AppStore) -> R) -> R {
        self.store.with(f)
    }

    pub fn set_input(&self, text: String) {
        self.store.update(|store| store.set_input(text));
    }

    /// Add the current input as a todo
    pub fn add(&self) {
        self.store.update(|store| {
            if let Err(e) = store.submit() {
                log::info!("[APP] Add rejected: {}", e);
            }
        });
    }

    pub fn delete(&self, id: TodoId) {
        self.store.update(|store| store.delete(&id));
    }

    pub fn delete_all(&self) {
        self.store.update(|store| store.delete_all());
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! Store Configuration

use log::LevelFilter;

/// Storage key the todo list has always lived under
pub const DEFAULT_STORAGE_KEY: &str = "TODOS";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Key of the persisted slot
    pub storage_key: String,
    /// Drop the validation message after a successful add.
    ///
    /// Off by default: the last message comes back whenever the list empties.
    pub clear_error_on_add: bool,
    /// Console log verbosity
    pub log_level: LevelFilter,
    /// Name shown after the copyright year in the footer
    pub footer_owner: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            clear_error_on_add: false,
            log_level: LevelFilter::Info,
            footer_owner: "Berat Dilki".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_clear_error_on_add(mut self, clear: bool) -> Self {
        self.clear_error_on_add = clear;
        self
    }
}

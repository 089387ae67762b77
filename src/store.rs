//! Persistent key-value storage for the selected language.
//!
//! The localizer only ever touches one key (configurable, `"language"` by
//! default), but stores are plain string maps so a host can share one with
//! other page state.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse store file: {0}")]
    Parse(String),

    #[error("Store file must contain a JSON object")]
    NotAnObject,
}

/// Capability to remember values across page loads.
pub trait LanguageStore {
    /// # Errors
    /// Backend failure. An absent key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    /// Backend failure.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

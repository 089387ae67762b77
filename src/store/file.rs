//! JSON settings file used as a language store.

use std::path::{
    Path,
    PathBuf,
};

use jsonc_parser::ParseOptions;
use jsonc_parser::cst::{
    CstInputValue,
    CstRootNode,
};
use serde_json::Value;

use super::{
    LanguageStore,
    StoreError,
};

/// Store backed by a JSON (or JSONC) object on disk.
///
/// Writes go through a concrete syntax tree, so comments and the layout of
/// unrelated entries survive. A missing file reads as empty and is created
/// on the first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_text(&self) -> Result<String, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

fn parse_value(text: &str) -> Result<Option<Value>, StoreError> {
    jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| StoreError::Parse(e.to_string()))
}

impl LanguageStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let text = self.read_text()?;
        match parse_value(&text)? {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(match map.get(key) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(other) => Some(other.to_string()),
            }),
            Some(_) => Err(StoreError::NotAnObject),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let text = self.read_text()?;
        if let Some(existing) = parse_value(&text)?
            && !existing.is_object()
        {
            return Err(StoreError::NotAnObject);
        }

        let root = CstRootNode::parse(&text, &ParseOptions::default())
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        let root_obj = root.object_value_or_set();
        let new_value = CstInputValue::String(value.to_string());
        match root_obj.get(key) {
            Some(prop) => {
                prop.set_value(new_value);
            }
            None => {
                root_obj.append(key, new_value);
            }
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, root.to_string())?;
        tracing::debug!(path = %self.path.display(), key, "Store entry written");
        Ok(())
    }
}

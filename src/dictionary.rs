//! Translation dictionary and the lookup fallback chain.
//!
//! Keys are opaque strings, dot-namespaced by convention (`"create.submit"`).
//! A key does not have to exist in every language: [`Dictionary::resolve`]
//! falls back to the default language and finally to the key itself, so an
//! untranslated key shows up verbatim on the page instead of failing.

pub mod loader;

use std::collections::HashMap;

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

use crate::language::Language;

/// Locale files compiled into the crate.
const BUILTIN_LOCALES: &[(Language, &str, &str)] = &[
    (Language::Ukrainian, "locales/uk.json", include_str!("../locales/uk.json")),
    (Language::English, "locales/en.json", include_str!("../locales/en.json")),
];

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read translation file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to discover translation files: {0}")]
    Discovery(String),
}

/// Language -> (key -> text).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary built from the locale files shipped with the crate.
    ///
    /// # Errors
    /// Only if an embedded locale file is malformed.
    pub fn builtin() -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        for (language, path, text) in BUILTIN_LOCALES {
            let json = parse_translation_text(path, text)?;
            dictionary.insert_language(*language, flatten_json(&json, ".", None));
        }
        Ok(dictionary)
    }

    /// Adds entries for `language`, replacing texts of keys already present.
    ///
    /// Returns the keys that were replaced.
    pub fn insert_language(
        &mut self,
        language: Language,
        entries: HashMap<String, String>,
    ) -> Vec<String> {
        let table = self.entries.entry(language).or_default();
        let mut replaced = Vec::new();
        for (key, text) in entries {
            if table.insert(key.clone(), text).is_some() {
                replaced.push(key);
            }
        }
        replaced
    }

    /// Exact lookup, no fallback.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.entries.get(&language).and_then(|table| table.get(key)).map(String::as_str)
    }

    /// Text for `key` in `active`, else in `default`, else `key` itself.
    ///
    /// Only a missing entry falls through. An entry stored as `""` is
    /// returned as `""`, unlike a truthiness check which would skip it.
    #[must_use]
    pub fn resolve<'a>(&'a self, active: Language, default: Language, key: &'a str) -> &'a str {
        self.lookup(active, key)
            .or_else(|| if active == default { None } else { self.lookup(default, key) })
            .unwrap_or(key)
    }

    /// Languages with at least one entry.
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, table)| !table.is_empty())
            .map(|(language, _)| *language)
            .collect();
        languages.sort();
        languages
    }

    /// Keys defined for `language`, in no particular order.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> {
        self.entries.get(&language).into_iter().flat_map(HashMap::keys).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}

/// Parses a translation file body, accepting comments and trailing commas.
fn parse_translation_text(path: &str, text: &str) -> Result<Value, DictionaryError> {
    let parsed = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| DictionaryError::Parse { path: path.to_string(), message: e.to_string() })?;
    Ok(parsed.unwrap_or_else(|| Value::Object(serde_json::Map::new())))
}

/// Flatten nested JSON object into separator-joined key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use page_i18n::dictionary::flatten_json;
///
/// let json = json!({
///     "create": {
///         "title": "Create Client",
///         "submit": "Create"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("create.title"), Some(&"Create Client".to_string()));
/// assert_eq!(flattened.get("create.submit"), Some(&"Create".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

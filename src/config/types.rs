use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::language::Language;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "bindings.title")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizerSettings {
    /// Used at startup when the store holds nothing usable, and as the
    /// second step of the lookup fallback chain.
    pub default_language: Language,

    /// Store key under which the active language code is persisted.
    pub storage_key: String,

    /// Name of the event published after every successful switch.
    pub event_name: String,

    /// Joins nested object keys when flattening translation files.
    pub key_separator: String,

    pub bindings: BindingAttributes,
    pub switcher: SwitcherConfig,
    pub translation_files: TranslationFilesConfig,
    pub exclude_patterns: Vec<String>,
}

/// Attribute names that tag elements for translation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BindingAttributes {
    pub text: String,
    pub title: String,
    pub html: String,
}

impl Default for BindingAttributes {
    fn default() -> Self {
        Self {
            text: "data-i18n".to_string(),
            title: "data-i18n-title".to_string(),
            html: "data-i18n-html".to_string(),
        }
    }
}

/// Element ids and keys of the optional language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwitcherConfig {
    pub current_label_id: String,
    pub switch_label_id: String,
    pub indicator_id: String,
    pub current_label_key: String,
    pub switch_label_key: String,
    /// Prepended to the language code to form the indicator's class list.
    pub indicator_class_prefix: String,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            current_label_id: "current-lang".to_string(),
            switch_label_id: "switch-lang".to_string(),
            indicator_id: "flag-icon".to_string(),
            current_label_key: "lang.current".to_string(),
            switch_label_key: "lang.switch-to".to_string(),
            indicator_class_prefix: "flag flag-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub file_pattern: String,
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/locales/**/*.json".to_string() }
    }
}

impl Default for LocalizerSettings {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            storage_key: "language".to_string(),
            event_name: "languageChanged".to_string(),
            key_separator: ".".to_string(),
            bindings: BindingAttributes::default(),
            switcher: SwitcherConfig::default(),
            translation_files: TranslationFilesConfig::default(),
            exclude_patterns: vec!["node_modules/**".to_string()],
        }
    }
}

impl LocalizerSettings {
    /// # Errors
    /// - Required field is empty
    /// - Binding attribute names collide
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let required = [
            ("storageKey", &self.storage_key),
            ("eventName", &self.event_name),
            ("keySeparator", &self.key_separator),
            ("bindings.text", &self.bindings.text),
            ("bindings.title", &self.bindings.title),
            ("bindings.html", &self.bindings.html),
        ];
        for (field_path, value) in required {
            if value.is_empty() {
                errors.push(ValidationError::new(field_path, "The value cannot be empty"));
            }
        }

        let mut seen = HashSet::new();
        for (field_path, attribute) in [
            ("bindings.text", &self.bindings.text),
            ("bindings.title", &self.bindings.title),
            ("bindings.html", &self.bindings.html),
        ] {
            if !attribute.is_empty() && !seen.insert(attribute.as_str()) {
                errors.push(ValidationError::new(
                    field_path,
                    format!("Attribute '{attribute}' is already used by another binding"),
                ));
            }
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/locales/**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

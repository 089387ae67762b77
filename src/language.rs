//! Supported display languages.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Raised when a language code outside the supported set is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language: '{0}'")]
pub struct UnsupportedLanguage(pub String);

/// Languages the page can be rendered in.
///
/// Adding a variant requires a locale file and a revisit of
/// [`Language::toggled`], which assumes exactly two members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code, also used as the persisted value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ukrainian => "uk",
            Self::English => "en",
        }
    }

    /// Case-sensitive lookup by code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "uk" => Some(Self::Ukrainian),
            "en" => Some(Self::English),
            _ => None,
        }
    }

    /// Name of the language in the language itself.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ukrainian => "Українська",
            Self::English => "English",
        }
    }

    /// The language a switcher offers when `self` is active.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ukrainian => Self::English,
            Self::English => Self::Ukrainian,
        }
    }

    /// All supported languages, default first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ukrainian, Self::English]
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| UnsupportedLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

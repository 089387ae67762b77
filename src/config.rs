//! Localizer configuration.
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_settings,
};
pub use types::{
    BindingAttributes,
    ConfigError,
    LocalizerSettings,
    SwitcherConfig,
    TranslationFilesConfig,
    ValidationError,
};

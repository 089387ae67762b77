//! The page localizer: active language state and the operations on it.

use std::path::Path;

use thiserror::Error;

use crate::config::{
    self,
    ConfigError,
    LocalizerSettings,
};
use crate::dictionary::{
    Dictionary,
    DictionaryError,
    loader,
};
use crate::events::{
    EventSink,
    LanguageChanged,
    PageEvent,
};
use crate::language::{
    Language,
    UnsupportedLanguage,
};
use crate::page::ElementProvider;
use crate::store::LanguageStore;
use crate::sync::{
    self,
    Resolver,
    SyncReport,
};

#[derive(Error, Debug)]
pub enum LocalizerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Owns the active language for one page session.
///
/// Construction reads the persisted language and renders the page once.
/// After that, [`Localizer::set_language`] and [`Localizer::toggle_language`]
/// are the only ways the language changes; each successful change is
/// persisted, re-rendered and announced exactly once.
#[derive(Debug)]
pub struct Localizer<S, P, E> {
    settings: LocalizerSettings,
    dictionary: Dictionary,
    language: Language,
    store: S,
    page: P,
    events: E,
}

impl<S, P, E> Localizer<S, P, E>
where
    S: LanguageStore,
    P: ElementProvider,
    E: EventSink,
{
    /// Initializes from the store and synchronizes the page.
    ///
    /// A stored code that is absent, unsupported or unreadable yields
    /// `settings.default_language`. Nothing is written back to the store
    /// and no event is published.
    ///
    /// # Errors
    /// `settings` fails [`LocalizerSettings::validate`]; nothing is read.
    pub fn new(
        settings: LocalizerSettings,
        dictionary: Dictionary,
        store: S,
        page: P,
        events: E,
    ) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let language = initial_language(&store, &settings);
        tracing::debug!(%language, "Localizer initialized");

        let mut localizer = Self { settings, dictionary, language, store, page, events };
        localizer.synchronize_page();
        localizer.refresh_switcher_affordance();
        Ok(localizer)
    }

    /// [`Localizer::new`] with the dictionary shipped in the crate.
    ///
    /// # Errors
    /// Invalid settings, or a malformed embedded locale file.
    pub fn with_builtin_dictionary(
        settings: LocalizerSettings,
        store: S,
        page: P,
        events: E,
    ) -> Result<Self, LocalizerError> {
        let dictionary = Dictionary::builtin()?;
        Ok(Self::new(settings, dictionary, store, page, events)?)
    }

    /// Settings from `root`'s config file, translations from the files
    /// under `root`. The built-in dictionary is used when no translation
    /// file is found.
    ///
    /// # Errors
    /// Unreadable or invalid config, or a malformed translation file.
    pub fn from_root(root: &Path, store: S, page: P, events: E) -> Result<Self, LocalizerError> {
        let settings = config::load_settings(root)?;
        let mut dictionary = loader::load_from_dir(root, &settings)?;
        if dictionary.is_empty() {
            tracing::debug!(root = %root.display(), "No translation files found, using built-in dictionary");
            dictionary = Dictionary::builtin()?;
        }
        Ok(Self::new(settings, dictionary, store, page, events)?)
    }

    #[must_use]
    pub const fn current_language(&self) -> Language {
        self.language
    }

    /// Text for `key` in the active language, the default language, or `key`.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolver().resolve(key)
    }

    /// Switches to the language with `code`.
    ///
    /// # Errors
    /// `code` is not a supported language. Nothing changes: no store write,
    /// no page update, no event.
    pub fn set_language(&mut self, code: &str) -> Result<Language, UnsupportedLanguage> {
        let language = code.parse::<Language>().inspect_err(|e| {
            tracing::warn!("{e}, keeping '{}'", self.language);
        })?;
        self.switch_to(language);
        Ok(language)
    }

    /// Switches to `language`, which is supported by construction.
    pub fn switch_to(&mut self, language: Language) {
        tracing::debug!(from = %self.language, to = %language, "Switching language");
        self.language = language;

        if let Err(e) = self.store.set(&self.settings.storage_key, language.code()) {
            tracing::warn!("Failed to persist language '{}': {}", language, e);
        }

        self.synchronize_page();
        self.refresh_switcher_affordance();
        self.events.publish(PageEvent {
            name: self.settings.event_name.clone(),
            detail: LanguageChanged { language },
        });
    }

    /// Switches to the other supported language and returns it.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.language.toggled();
        self.switch_to(next);
        next
    }

    /// Re-applies every tagged element of the page.
    pub fn synchronize_page(&mut self) -> SyncReport {
        let resolver = Resolver::new(&self.dictionary, self.language, self.settings.default_language);
        sync::synchronize_page(&mut self.page, &resolver, &self.settings.bindings)
    }

    /// Updates the optional switcher labels and indicator.
    pub fn refresh_switcher_affordance(&mut self) -> SyncReport {
        let resolver = Resolver::new(&self.dictionary, self.language, self.settings.default_language);
        sync::refresh_switcher(&mut self.page, &resolver, &self.settings.switcher)
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.dictionary, self.language, self.settings.default_language)
    }
}

impl<S, P, E> Localizer<S, P, E> {
    #[must_use]
    pub const fn settings(&self) -> &LocalizerSettings {
        &self.settings
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Mutable page access for host-driven changes. Call
    /// [`Localizer::synchronize_page`] afterwards to translate new elements.
    pub const fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[must_use]
    pub const fn events(&self) -> &E {
        &self.events
    }

    /// Ends the session, handing back the capabilities.
    pub fn into_parts(self) -> (S, P, E) {
        (self.store, self.page, self.events)
    }
}

fn initial_language<S: LanguageStore>(store: &S, settings: &LocalizerSettings) -> Language {
    let default = settings.default_language;
    match store.get(&settings.storage_key) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
            tracing::warn!("Stored language '{}' is not supported, using '{}'", code, default);
            default
        }),
        Ok(None) => default,
        Err(e) => {
            tracing::warn!("Failed to read stored language, using '{}': {}", default, e);
            default
        }
    }
}

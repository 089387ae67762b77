//! page-i18n
//!
//! 静的ページ向けのクライアントサイド多言語化エンジン。
//! 翻訳辞書・言語状態の永続化・ページ要素への反映・言語変更イベントを提供する。

pub mod config;
pub mod dictionary;
pub mod events;
pub mod language;
pub mod localizer;
pub mod page;
pub mod store;
pub mod sync;

mod test_utils;

pub use config::LocalizerSettings;
pub use dictionary::Dictionary;
pub use events::{
    BroadcastNotifier,
    EventSink,
    PageEvent,
};
pub use language::{
    Language,
    UnsupportedLanguage,
};
pub use localizer::{
    Localizer,
    LocalizerError,
};
pub use page::{
    ElementProvider,
    Page,
};
pub use store::{
    JsonFileStore,
    LanguageStore,
    MemoryStore,
};

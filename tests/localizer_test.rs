//! ページ多言語化の結合テスト

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use googletest::prelude::*;
use page_i18n::config::LocalizerSettings;
use page_i18n::events::{
    BroadcastNotifier,
    LanguageChanged,
    PageEvent,
};
use page_i18n::page::{
    Element,
    Page,
};
use page_i18n::store::{
    JsonFileStore,
    LanguageStore,
    MemoryStore,
};
use page_i18n::{
    Dictionary,
    Language,
    Localizer,
};
use rstest::rstest;

fn page() -> Page {
    let mut page = Page::default();
    page.push(Element::new("span").with_id("current-lang"));
    page.push(Element::new("span").with_id("switch-lang"));
    page.push(Element::new("i").with_id("flag-icon"));
    page.push(Element::new("div").with_id("stats").with_attribute("data-i18n", "stats.loading"));
    page.push(Element::new("p").with_id("stats-again").with_attribute("data-i18n", "stats.loading"));
    page.push(
        Element::new("input")
            .with_id("domain")
            .with_attribute("type", "text")
            .with_attribute("data-i18n", "create.domain.placeholder"),
    );
    page.push(
        Element::new("input")
            .with_id("submit")
            .with_attribute("type", "submit")
            .with_attribute("data-i18n", "create.submit"),
    );
    page.push(Element::new("button").with_id("deploy").with_attribute("data-i18n-title", "clients.button.deploy"));
    page
}

fn localizer<S: LanguageStore>(store: S) -> Localizer<S, Page, Vec<PageEvent>> {
    Localizer::with_builtin_dictionary(LocalizerSettings::default(), store, page(), Vec::new()).unwrap()
}

fn text_of<'a>(page: &'a Page, dom_id: &str) -> &'a str {
    page.find(dom_id).unwrap().content().as_str()
}

#[rstest]
#[case(Language::Ukrainian)]
#[case(Language::English)]
fn resolve_returns_stored_string_for_every_key(#[case] language: Language) {
    let builtin = Dictionary::builtin().unwrap();
    let mut localizer = localizer(MemoryStore::new());
    localizer.switch_to(language);

    let keys: Vec<String> = builtin.keys(language).map(str::to_string).collect();
    assert!(!keys.is_empty());
    for key in &keys {
        assert_eq!(Some(localizer.resolve(key)), builtin.lookup(language, key), "key {key}");
    }
    assert_eq!(localizer.dictionary(), &builtin);
}

#[googletest::test]
fn resolve_falls_back_to_default_language_then_key() {
    let mut dictionary = Dictionary::new();
    dictionary.insert_language(
        Language::Ukrainian,
        [("stats.loading", "Завантаження..."), ("create.submit", "Створити")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    dictionary.insert_language(
        Language::English,
        [("stats.loading".to_string(), "Loading...".to_string())].into_iter().collect(),
    );
    let mut localizer =
        Localizer::new(LocalizerSettings::default(), dictionary, MemoryStore::new(), page(), ()).unwrap();
    localizer.switch_to(Language::English);

    expect_that!(localizer.resolve("stats.loading"), eq("Loading..."));
    expect_that!(localizer.resolve("create.submit"), eq("Створити"));
    expect_that!(localizer.resolve("no.such.key"), eq("no.such.key"));
    expect_that!(localizer.resolve(""), eq(""));
}

#[googletest::test]
fn unsupported_language_is_rejected_without_store_write() {
    let mut localizer = localizer(MemoryStore::with_value("language", "en"));

    let result = localizer.set_language("fr");

    expect_that!(result.is_err(), eq(true));
    expect_that!(localizer.current_language().code(), eq("en"));
    expect_that!(localizer.store().get("language").unwrap(), some(eq("en")));
    expect_that!(localizer.store().len(), eq(1));
    expect_that!(localizer.events().is_empty(), eq(true));
}

#[googletest::test]
fn language_survives_fresh_initialization() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{\n  // user preferences\n  \"theme\": \"dark\"\n}\n").unwrap();

    let mut first = localizer(JsonFileStore::new(&path));
    expect_that!(first.current_language(), eq(Language::Ukrainian));
    first.set_language("en").unwrap();
    expect_that!(first.current_language().code(), eq("en"));
    drop(first);

    let second = localizer(JsonFileStore::new(&path));
    expect_that!(second.current_language().code(), eq("en"));
    expect_that!(text_of(second.page(), "stats"), eq("Loading..."));

    let written = std::fs::read_to_string(&path).unwrap();
    expect_that!(written, contains_substring("// user preferences"));
    expect_that!(written, contains_substring("\"theme\": \"dark\""));
}

#[rstest]
#[case::from_ukrainian(MemoryStore::new(), Language::Ukrainian)]
#[case::from_english(MemoryStore::with_value("language", "en"), Language::English)]
fn toggle_twice_is_identity(#[case] store: MemoryStore, #[case] start: Language) {
    let mut localizer = localizer(store);
    let initial_page = localizer.page().clone();
    assert_eq!(localizer.current_language(), start);

    localizer.toggle_language();
    assert_ne!(localizer.current_language(), start);
    localizer.toggle_language();

    assert_eq!(localizer.current_language(), start);
    assert_eq!(localizer.page(), &initial_page);
    assert_eq!(localizer.events().len(), 2);
}

#[googletest::test]
fn stats_loading_follows_active_language() {
    let mut localizer = localizer(MemoryStore::new());

    expect_that!(text_of(localizer.page(), "stats"), eq("Завантаження..."));
    expect_that!(text_of(localizer.page(), "stats-again"), eq("Завантаження..."));

    localizer.set_language("en").unwrap();

    expect_that!(text_of(localizer.page(), "stats"), eq("Loading..."));
    expect_that!(text_of(localizer.page(), "stats-again"), eq("Loading..."));
}

#[googletest::test]
fn synchronize_twice_is_idempotent() {
    let mut localizer = localizer(MemoryStore::with_value("language", "en"));

    let first = localizer.synchronize_page();
    let after_first = localizer.page().clone();
    let second = localizer.synchronize_page();

    assert_eq!(localizer.page(), &after_first);
    expect_that!(second, eq(first));
}

#[googletest::test]
fn text_input_receives_placeholder() {
    let localizer = localizer(MemoryStore::with_value("language", "en"));
    let input = localizer.page().find("domain").unwrap();

    expect_that!(input.attribute("placeholder"), some(eq("example.com")));
    expect_that!(input.attribute("value"), none());
    expect_that!(input.content().as_str(), eq(""));
}

#[googletest::test]
fn action_input_receives_value_and_title_binding_applies() {
    let localizer = localizer(MemoryStore::with_value("language", "en"));

    expect_that!(localizer.page().find("submit").unwrap().attribute("value"), some(eq("Create")));
    expect_that!(localizer.page().find("deploy").unwrap().attribute("title"), some(eq("Deploy")));
}

#[googletest::test]
fn switcher_reflects_current_language() {
    let mut localizer = localizer(MemoryStore::new());

    expect_that!(text_of(localizer.page(), "current-lang"), eq("Українська"));
    expect_that!(text_of(localizer.page(), "switch-lang"), eq("English"));
    expect_that!(localizer.page().find("flag-icon").unwrap().attribute("class"), some(eq("flag flag-uk")));

    localizer.toggle_language();

    expect_that!(text_of(localizer.page(), "current-lang"), eq("English"));
    expect_that!(text_of(localizer.page(), "switch-lang"), eq("Українська"));
    expect_that!(localizer.page().find("flag-icon").unwrap().attribute("class"), some(eq("flag flag-en")));
}

#[tokio::test]
async fn listeners_receive_language_changes() {
    let notifier = BroadcastNotifier::default();
    let mut receiver = notifier.subscribe();
    let mut localizer =
        Localizer::with_builtin_dictionary(LocalizerSettings::default(), MemoryStore::new(), page(), notifier)
            .unwrap();

    localizer.set_language("en").unwrap();
    let _ = localizer.set_language("fr");
    localizer.toggle_language();

    let first = receiver.recv().await.unwrap();
    let second = receiver.recv().await.unwrap();
    assert_eq!(
        first,
        PageEvent { name: "languageChanged".to_string(), detail: LanguageChanged { language: Language::English } }
    );
    assert_eq!(second.detail.language, Language::Ukrainian);
    assert!(receiver.try_recv().is_err());
}

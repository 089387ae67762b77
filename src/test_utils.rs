//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::collections::HashMap;

use crate::dictionary::Dictionary;
use crate::language::Language;
use crate::page::{
    Element,
    Page,
};

/// `(言語, キー, 値)` の並びから Dictionary を作成する
pub(crate) fn dictionary_from(entries: &[(Language, &str, &str)]) -> Dictionary {
    let mut by_language: HashMap<Language, HashMap<String, String>> = HashMap::new();
    for (language, key, value) in entries {
        by_language.entry(*language).or_default().insert((*key).to_string(), (*value).to_string());
    }

    let mut dictionary = Dictionary::new();
    for (language, map) in by_language {
        dictionary.insert_language(language, map);
    }
    dictionary
}

/// オンボーディング画面を模したページを作成する
///
/// 言語切り替え要素（`current-lang`, `switch-lang`, `flag-icon`）と、
/// 各種バインディングを持つ要素を含む。
pub(crate) fn onboarding_page() -> Page {
    let mut page = Page::default();
    page.push(Element::new("span").with_id("current-lang").with_text("Українська"));
    page.push(Element::new("span").with_id("switch-lang").with_text("English"));
    page.push(Element::new("span").with_id("flag-icon").with_attribute("class", "flag flag-uk"));
    page.push(Element::new("p").with_attribute("data-i18n", "header.subtitle"));
    page.push(Element::new("div").with_id("stats").with_attribute("data-i18n", "stats.loading"));
    page.push(
        Element::new("input")
            .with_attribute("type", "text")
            .with_attribute("data-i18n", "create.domain.placeholder"),
    );
    page.push(
        Element::new("input")
            .with_attribute("type", "submit")
            .with_attribute("data-i18n", "create.submit"),
    );
    page.push(Element::new("button").with_attribute("data-i18n-title", "clients.button.deploy"));
    page.push(Element::new("div").with_attribute("data-i18n-html", "help.steps"));
    page
}

//! Translation file discovery.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::{
    Dictionary,
    DictionaryError,
    flatten_json,
    parse_translation_text,
};
use crate::config::LocalizerSettings;
use crate::language::Language;

/// Detect language from file path
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that is a supported language code.
///
/// # Examples
/// - `locales/en.json` → English
/// - `locales/uk/common.json` → Ukrainian
/// - `locales/fr.json` → None
fn detect_language_from_path(file_path: &Path) -> Option<Language> {
    let path_str = file_path.to_string_lossy();
    path_str.split(['/', '\\', '.']).rev().find_map(Language::from_code)
}

/// Builds every translation file under `root` into one dictionary.
///
/// Files are matched against `translationFiles.filePattern` relative to
/// `root`, minus `excludePatterns`; the walk honours `.gitignore`. Files
/// whose path names no supported language are skipped.
///
/// # Errors
/// - Invalid glob pattern
/// - Unreadable or malformed translation file
pub fn load_from_dir(root: &Path, settings: &LocalizerSettings) -> Result<Dictionary, DictionaryError> {
    tracing::debug!(root = %root.display(), "Loading translation files");

    let include_set = build_glob_set(std::slice::from_ref(&settings.translation_files.file_pattern))?;
    let exclude_set = build_glob_set(&settings.exclude_patterns)?;

    let mut dictionary = Dictionary::new();
    for file_path in find_translation_files(root, &include_set, &exclude_set) {
        let Some(language) = detect_language_from_path(&file_path) else {
            tracing::warn!("Skipping translation file with unsupported language: {:?}", file_path);
            continue;
        };

        let path = file_path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(&file_path)
            .map_err(|source| DictionaryError::Io { path: path.clone(), source })?;
        let json = parse_translation_text(&path, &content)?;
        let entries = flatten_json(&json, &settings.key_separator, None);
        tracing::debug!(%language, keys = entries.len(), "Loaded {}", path);

        for key in dictionary.insert_language(language, entries) {
            tracing::warn!(%language, "Duplicate translation key '{}' overridden by {}", key, path);
        }
    }

    Ok(dictionary)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, DictionaryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            DictionaryError::Discovery(format!("Invalid pattern '{pattern}': {e}"))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| DictionaryError::Discovery(format!("Failed to build patterns: {e}")))
}

/// Sorted so that later files override earlier ones deterministically.
fn find_translation_files(root: &Path, include_set: &GlobSet, exclude_set: &GlobSet) -> Vec<PathBuf> {
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    found_files
}

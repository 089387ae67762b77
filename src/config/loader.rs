//! 設定ファイルの読み込み関数

use std::path::Path;

use jsonc_parser::ParseOptions;

use super::{
    ConfigError,
    LocalizerSettings,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".page-i18n.json";

/// ルートディレクトリから設定を読み込む
///
/// `.page-i18n.json` ファイルを探して読み込む。コメント付き JSON (JSONC) も受け付ける。
///
/// # Arguments
/// * `root` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
fn load_from_root(root: &Path) -> Result<Option<LocalizerSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let value = jsonc_parser::parse_to_serde_value(&content, &ParseOptions::default())
        .map_err(|e| ConfigError::ParseError(e.to_string()))?
        .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
    let settings: LocalizerSettings = serde_json::from_value(value)?;

    Ok(Some(settings))
}

/// ルートディレクトリの設定を読み込み、検証する
///
/// 設定ファイルが無い場合はデフォルト設定を検証して返す。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー（全件まとめて `ConfigError::ValidationErrors`）
pub fn load_settings(root: &Path) -> Result<LocalizerSettings, ConfigError> {
    let settings = load_from_root(root)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded: {:?}", settings);
    Ok(settings)
}

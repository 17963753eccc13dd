//! 翻訳ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    TranslationSettings,
};
use crate::translator::FieldErrorTranslator;

/// 翻訳ファイルを読み込む
///
/// # Arguments
/// * `path` - JSON 形式の翻訳ファイルのパス
///
/// # Errors
/// - ファイル読み込みエラー（ファイルが存在しない場合も含む）
/// - JSON パースエラー
pub fn load_from_path(path: &Path) -> Result<TranslationSettings, ConfigError> {
    tracing::debug!("Loading translations from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let settings: TranslationSettings = serde_json::from_str(&content)?;

    Ok(settings)
}

/// 翻訳ファイルを読み込み、バリデーション後に `FieldErrorTranslator` を構築する
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_translator(path: &Path) -> Result<FieldErrorTranslator<String>, ConfigError> {
    let translator = load_from_path(path)?.build()?;
    tracing::debug!("Translations loaded successfully: {:?}", path);

    Ok(translator)
}

//! テスト用ユーティリティ
//!
//! 複数のテストモジュールで使用される共通の識別子とヘルパーを提供します。
#![cfg(test)]

use std::collections::HashMap;

/// テスト用のバリデーションエラー識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Rule {
    /// 必須
    Required,
    /// 最小値
    Min,
    /// 最大値
    Max,
}

/// `ErrorMap` を作成する
///
/// ```ignore
/// error_map!("email" => [Rule::Required], "name" => [Rule::Min, Rule::Max])
/// ```
macro_rules! error_map {
    ($($field:expr => [$($err:expr),* $(,)?]),* $(,)?) => {
        $crate::types::ErrorMap::from([$(($field.to_string(), vec![$($err),*])),*])
    };
}

pub(crate) use error_map;

/// 期待される翻訳結果のマップを作成する
pub(crate) fn translations<const N: usize>(entries: [(&str, &str); N]) -> HashMap<String, String> {
    entries.into_iter().map(|(field, message)| (field.to_string(), message.to_string())).collect()
}

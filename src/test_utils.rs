//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::catalog::{
    Catalog,
    TranslationStore,
};
use crate::i18n::{
    OverlaySource,
    Translator,
};

/// JSON 文字列から `Catalog` を作成する
///
/// # Panics
/// JSON が不正な場合
#[allow(clippy::expect_used)]
pub(crate) fn catalog_from_json(json: &str) -> Catalog {
    serde_json::from_str(json).expect("test catalog must be valid JSON")
}

/// 組み込み翻訳から `Translator` を作成する
///
/// # Panics
/// 組み込み翻訳が存在しない言語の場合
#[allow(clippy::expect_used)]
pub(crate) fn builtin_translator(language: &str) -> Translator {
    let store = TranslationStore::embedded();
    let catalog = store.builtin(language).expect("language must have a built-in catalog");
    Translator::new(language, catalog, store.fallback())
}

/// ファイル名ごとに内容と遅延を指定できるオーバーレイソース
///
/// 登録されていないファイルは `NotFound` を返す。
#[derive(Debug, Default, Clone)]
pub(crate) struct ScriptedSource {
    /// ファイル名 → 内容
    files: Arc<HashMap<String, String>>,
    /// ファイル名 → 応答までの遅延
    delays: Arc<HashMap<String, Duration>>,
}

impl ScriptedSource {
    /// 空のソースを作成する
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// ファイルの内容を登録する
    pub(crate) fn with_file(mut self, file: &str, text: &str) -> Self {
        Arc::make_mut(&mut self.files).insert(file.to_string(), text.to_string());
        self
    }

    /// ファイルの応答を遅らせる
    pub(crate) fn with_delay(mut self, file: &str, delay: Duration) -> Self {
        Arc::make_mut(&mut self.delays).insert(file.to_string(), delay);
        self
    }
}

impl OverlaySource for ScriptedSource {
    fn fetch<'a>(&'a self, file: &'a str) -> BoxFuture<'a, std::io::Result<String>> {
        Box::pin(async move {
            if let Some(delay) = self.delays.get(file) {
                tokio::time::sleep(*delay).await;
            }
            self.files.get(file).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, format!("{file} not found"))
            })
        })
    }
}

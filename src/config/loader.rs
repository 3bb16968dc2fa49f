//! `.foss4gov.json` の読み込み

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    SiteSettings,
};

/// サイトルートに置く設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".foss4gov.json";

/// サイトルートの `.foss4gov.json` を読み込む
///
/// ファイルがなければ `Ok(None)`。書かれていない項目はデフォルト値になる。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー（型の合わない値を含む）
pub(super) fn load_from_site_root(site_root: &Path) -> Result<Option<SiteSettings>, ConfigError> {
    let config_path = site_root.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "No site configuration, using defaults");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(path = %config_path.display(), "Loading site configuration");
    Ok(Some(serde_json::from_str(&content)?))
}

//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    SiteSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: SiteSettings,

    /// サイトのルートパス
    site_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SiteSettings::default(), site_root: None }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `site_root` - サイトのルートパス
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, site_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for site: {:?}", site_root);

        // サイトの設定を読み込み
        let settings = if let Some(root) = &site_root {
            loader::load_from_site_root(root)?.map_or_else(SiteSettings::default, |site| {
                tracing::debug!("Loaded site settings: {:?}", site);
                site
            })
        } else {
            SiteSettings::default()
        };

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を保存
        self.current_settings = settings;
        self.site_root = site_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を置き換える
    ///
    /// `--no-overlays` などコマンドライン側の上書きはここを通して反映する。
    /// 無効な設定は保存しない。
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: SiteSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        // バリデーション
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を更新
        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &SiteSettings {
        &self.current_settings
    }

    /// 設定内の相対パスをサイトルート基準に解決する
    ///
    /// サイトルートが未設定の場合はカレントディレクトリ基準
    #[must_use]
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.site_root.as_ref().map_or_else(
            || relative.as_ref().to_path_buf(),
            |root| root.join(relative.as_ref()),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    /// new: デフォルト値で作成される
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().lang_dir, "lang");
        assert_eq!(manager.resolve("lang"), PathBuf::from("lang"));
    }

    /// load_settings: site_root が None の場合
    #[rstest]
    fn test_load_settings_without_site_root() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().repository, "foss4gov/foss4gov");
    }

    /// load_settings: 設定ファイルがある場合
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"companiesFile": "data/companies.csv"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().companies_file, "data/companies.csv");
        assert_eq!(
            manager.resolve(&manager.get_settings().companies_file),
            temp_dir.path().join("data/companies.csv")
        );
    }

    /// load_settings: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings(), &SiteSettings::default());
    }

    /// load_settings: 無効な設定ファイルは保存されない
    #[rstest]
    fn test_load_settings_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"repository": "nope"}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings(), &SiteSettings::default());
        assert_eq!(manager.resolve("index.html"), PathBuf::from("index.html"));
    }

    /// update_settings: 読み込んだ設定にオーバーレイ無効化を重ねる
    #[rstest]
    fn test_update_settings_disables_overlays_after_load() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"langDir": "i18n"}"#).unwrap();
        let mut manager = ConfigManager::new();
        manager.load_settings(Some(temp_dir.path().to_path_buf())).unwrap();

        let overridden = SiteSettings { overlays: false, ..manager.get_settings().clone() };
        let result = manager.update_settings(overridden);

        assert!(result.is_ok());
        assert!(!manager.get_settings().overlays);
        assert_eq!(manager.get_settings().lang_dir, "i18n");
        assert_eq!(manager.resolve("i18n"), temp_dir.path().join("i18n"));
    }

    /// update_settings: 無効な設定は保存されない
    #[rstest]
    fn test_update_settings_invalid_keeps_previous() {
        let mut manager = ConfigManager::new();
        let new_settings = SiteSettings { output_file: String::new(), ..SiteSettings::default() };

        let result = manager.update_settings(new_settings);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().output_file, "index.html");
    }

    /// resolve: サイトルート未設定ならそのまま
    #[rstest]
    fn test_resolve_without_site_root() {
        let manager = ConfigManager::new();

        assert_eq!(manager.resolve("index.html"), PathBuf::from("index.html"));
    }
}

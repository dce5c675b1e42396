//! 設定モジュール

use crate::error::ConfigError;
use crate::format::{LineFormatter, LineStyle, TimestampStyle};
use crate::level::SeverityLevel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// コンソール出力を抑止する実行環境名
pub const PRODUCTION: &str = "production";

/// ロガー設定
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// 初期ログレベル
    pub initial_level: SeverityLevel,
    /// ログファイル出力ディレクトリ
    pub file_dirname: PathBuf,
    /// 実行環境（"production"ならコンソール出力なし）
    pub environment: String,
    /// タイムスタンプ表記
    pub timestamp: TimestampStyle,
    /// 行の形式
    pub line_style: LineStyle,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            initial_level: SeverityLevel::Info,
            file_dirname: PathBuf::from("logs"),
            environment: "development".to_string(),
            timestamp: TimestampStyle::default(),
            line_style: LineStyle::default(),
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    initial_level: Option<SeverityLevel>,
    file_dirname: Option<String>,
    environment: Option<String>,
    timestamp: Option<TimestampStyle>,
    line_style: Option<LineStyle>,
}

impl LoggerConfig {
    pub fn new(
        initial_level: SeverityLevel,
        file_dirname: impl Into<PathBuf>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            initial_level,
            file_dirname: file_dirname.into(),
            environment: environment.into(),
            ..Default::default()
        }
    }

    /// 設定ファイルを読み込む
    ///
    /// 優先順位: 設定ファイル > デフォルト値。ファイルが無ければデフォルト値のみ。
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// TOML文字列から設定を作成
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file_config: FileConfig = toml::from_str(content)?;
        let mut config = Self::default();
        config.merge_file_config(file_config);
        config.validate()?;
        Ok(config)
    }

    /// 本番環境かどうか
    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION
    }

    /// 設定に対応する行フォーマッタ
    pub fn formatter(&self) -> LineFormatter {
        LineFormatter::new(self.timestamp, self.line_style)
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: FileConfig) {
        if let Some(level) = file_config.initial_level {
            self.initial_level = level;
        }
        if let Some(dirname) = file_config.file_dirname {
            self.file_dirname = PathBuf::from(dirname);
        }
        if let Some(environment) = file_config.environment {
            self.environment = environment;
        }
        if let Some(timestamp) = file_config.timestamp {
            self.timestamp = timestamp;
        }
        if let Some(line_style) = file_config.line_style {
            self.line_style = line_style;
        }
    }

    /// 設定値をバリデート
    ///
    /// ディレクトリの書き込み可否は最初の書き込み時まで確認しない。
    fn validate(&self) -> Result<(), ConfigError> {
        if self.file_dirname.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "file_dirname must not be empty".to_string(),
            ));
        }
        if self.environment.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "environment must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.initial_level, SeverityLevel::Info);
        assert_eq!(config.file_dirname, PathBuf::from("logs"));
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert_eq!(config.formatter(), LineFormatter::default());
    }

    #[test]
    fn test_from_toml_all_fields() {
        let config = LoggerConfig::from_toml_str(
            r#"
            initial_level = "debug"
            file_dirname = "/var/log/api"
            environment = "production"
            timestamp = "millis"
            line_style = "terse"
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_level, SeverityLevel::Debug);
        assert_eq!(config.file_dirname, PathBuf::from("/var/log/api"));
        assert!(config.is_production());
        assert_eq!(config.timestamp, TimestampStyle::Millis);
        assert_eq!(config.line_style, LineStyle::Terse);
    }

    #[test]
    fn test_from_toml_keeps_defaults() {
        let config = LoggerConfig::from_toml_str(r#"initial_level = "warning""#).unwrap();
        assert_eq!(config.initial_level, SeverityLevel::Warn);
        assert_eq!(config.file_dirname, PathBuf::from("logs"));
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_from_toml_invalid_level() {
        let result = LoggerConfig::from_toml_str(r#"initial_level = "loud""#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validate_empty_dirname() {
        let result = LoggerConfig::from_toml_str(r#"file_dirname = """#);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validate_empty_environment() {
        let mut config = LoggerConfig::default();
        config.environment = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggerConfig::load(&temp_dir.path().join("logger.toml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logger.toml");
        fs::write(&path, "environment = \"staging\"\ninitial_level = \"http\"\n").unwrap();

        let config = LoggerConfig::load(&path).unwrap();
        assert_eq!(config.environment, "staging");
        assert_eq!(config.initial_level, SeverityLevel::Http);
    }

    #[test]
    fn test_new_sets_core_fields() {
        let config = LoggerConfig::new(SeverityLevel::Error, "/tmp/logs", PRODUCTION);
        assert_eq!(config.initial_level, SeverityLevel::Error);
        assert!(config.is_production());
        assert_eq!(config.timestamp, TimestampStyle::Seconds);
    }
}

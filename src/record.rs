//! ログレコードモジュール

use crate::level::SeverityLevel;
use chrono::{DateTime, Local};
use serde_json::{Map, Value};

/// 構造化メタデータ
pub type Metadata = Map<String, Value>;

/// 1回のログ呼び出しで生成されるレコード
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: SeverityLevel,
    pub message: String,
    pub metadata: Metadata,
}

impl LogRecord {
    /// 現在時刻でレコードを作成
    pub fn new(level: SeverityLevel, message: impl Into<String>, metadata: Metadata) -> Self {
        Self::at(Local::now(), level, message, metadata)
    }

    /// 指定時刻でレコードを作成
    pub fn at(
        timestamp: DateTime<Local>,
        level: SeverityLevel,
        message: impl Into<String>,
        metadata: Metadata,
    ) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
            metadata,
        }
    }

    /// メタデータが付与されているか
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}

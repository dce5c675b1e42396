//! ログレベル定義モジュール
//!
//! 重要度の高い順:
//! - fatal: アプリケーションの継続が困難な致命的障害
//! - error: 重要な処理の失敗
//! - warn: 想定外だが処理は継続できる問題
//! - info: 通常の動作記録
//! - http: HTTPリクエストの記録
//! - verbose: 詳細メッセージ
//! - debug: 診断用の情報
//! - trace: debugより細かい動作追跡
//! - silly: 最も詳細なメッセージ

use crate::error::ParseLevelError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Fatal,
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Http,
    Verbose,
    Debug,
    Trace,
    Silly,
}

impl SeverityLevel {
    /// 全レベル（重要度の高い順）
    pub const ALL: [SeverityLevel; 9] = [
        SeverityLevel::Fatal,
        SeverityLevel::Error,
        SeverityLevel::Warn,
        SeverityLevel::Info,
        SeverityLevel::Http,
        SeverityLevel::Verbose,
        SeverityLevel::Debug,
        SeverityLevel::Trace,
        SeverityLevel::Silly,
    ];

    /// 正規のトークン文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Fatal => "fatal",
            SeverityLevel::Error => "error",
            SeverityLevel::Warn => "warn",
            SeverityLevel::Info => "info",
            SeverityLevel::Http => "http",
            SeverityLevel::Verbose => "verbose",
            SeverityLevel::Debug => "debug",
            SeverityLevel::Trace => "trace",
            SeverityLevel::Silly => "silly",
        }
    }

    /// 重要度の順位（0が最も重要）
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// 順位からレベルを復元
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank)).copied()
    }

    /// 閾値`threshold`の下でこのレベルが出力対象かどうか
    pub fn is_enabled_at(&self, threshold: SeverityLevel) -> bool {
        self.rank() <= threshold.rank()
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        if token == "warning" {
            return Ok(SeverityLevel::Warn);
        }
        Self::ALL
            .iter()
            .find(|level| level.as_str() == token)
            .copied()
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

//! 行フォーマットモジュール
//!
//! ファイル向けは常にプレーンテキスト、コンソール向けのみレベル部分を色付けする。

use crate::level::SeverityLevel;
use crate::record::LogRecord;
use colored::{ColoredString, Colorize};
use serde::Deserialize;

/// タイムスタンプ表記
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampStyle {
    /// HH:MM:SS
    #[default]
    Seconds,
    /// HH:MM:SS + mmm
    Millis,
}

impl TimestampStyle {
    fn pattern(&self) -> &'static str {
        match self {
            TimestampStyle::Seconds => "%H:%M:%S",
            TimestampStyle::Millis => "%H:%M:%S + %3f",
        }
    }
}

/// 行の形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// `[ 時刻 ] [ level ]: メッセージ`
    #[default]
    Bracketed,
    /// `[ 時刻 ] - LEVEL: メッセージ`
    Terse,
}

/// ログレコードを1行に整形する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineFormatter {
    pub timestamp: TimestampStyle,
    pub style: LineStyle,
}

impl LineFormatter {
    pub fn new(timestamp: TimestampStyle, style: LineStyle) -> Self {
        Self { timestamp, style }
    }

    /// ファイル向けの整形（色なし）
    pub fn format_plain(&self, record: &LogRecord) -> String {
        let level = self.level_token(record.level);
        self.assemble(record, &level)
    }

    /// コンソール向けの整形（レベルを色付け）
    pub fn format_colored(&self, record: &LogRecord) -> String {
        let level = paint(record.level, self.level_token(record.level));
        self.assemble(record, &level.to_string())
    }

    fn level_token(&self, level: SeverityLevel) -> String {
        match self.style {
            LineStyle::Bracketed => level.as_str().to_string(),
            LineStyle::Terse => level.as_str().to_uppercase(),
        }
    }

    fn assemble(&self, record: &LogRecord, level: &str) -> String {
        let timestamp = record.timestamp.format(self.timestamp.pattern());
        let mut line = match self.style {
            LineStyle::Bracketed => format!("[ {} ] [ {} ]: {}", timestamp, level, record.message),
            LineStyle::Terse => format!("[ {} ] - {}: {}", timestamp, level, record.message),
        };

        if record.has_metadata() {
            // Map<String, Value>のシリアライズは失敗しない
            if let Ok(json) = serde_json::to_string_pretty(&record.metadata) {
                line = format!("{} - {}", line, json);
            }
        }

        line
    }
}

/// レベルごとの配色
fn paint(level: SeverityLevel, text: String) -> ColoredString {
    match level {
        SeverityLevel::Fatal | SeverityLevel::Error => text.red().bold(),
        SeverityLevel::Warn => text.yellow(),
        SeverityLevel::Info | SeverityLevel::Http => text.green(),
        SeverityLevel::Verbose => text.cyan(),
        SeverityLevel::Debug => text.blue(),
        SeverityLevel::Trace | SeverityLevel::Silly => text.magenta(),
    }
}

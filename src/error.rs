//! エラー型定義モジュール

use std::io;
use thiserror::Error;
use tracing_appender::rolling::InitError;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("設定値が不正です: {0}")]
    InvalidValue(String),
}

/// トランスポート書き込みエラー
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("ログファイルを開けません: {0}")]
    OpenFailed(#[from] InitError),

    #[error("書き込みエラー: {0}")]
    WriteFailed(#[from] io::Error),
}

/// ログレベル文字列の解析エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不明なログレベル: {0}")]
pub struct ParseLevelError(pub String);

//! ロガー本体モジュール
//!
//! レベル別メソッドとHTTPステータス連動の`rest`を提供する。
//! 書き込み失敗は呼び出し側に返さず、`tracing`のエラーイベントとして通知する。

use crate::config::LoggerConfig;
use crate::http_code::classify;
use crate::level::SeverityLevel;
use crate::record::{LogRecord, Metadata};
use crate::transport::{ConsoleTransport, FileTransport, Transport, TransportKind};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::error;
use tracing_subscriber::fmt::MakeWriter;

macro_rules! level_methods {
    ($($(#[$doc:meta])* $name:ident, $with_name:ident => $level:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, message: impl Into<String>) {
                self.log($level, message, Metadata::new());
            }

            /// メタデータ付きで出力
            pub fn $with_name(&self, message: impl Into<String>, metadata: Metadata) {
                self.log($level, message, metadata);
            }
        )*
    };
}

/// レベル付きロガー
pub struct LogFacade {
    level: AtomicU8,
    transports: Vec<Box<dyn Transport>>,
}

impl LogFacade {
    /// 設定からロガーを作成（コンソールは標準出力）
    pub fn new(config: &LoggerConfig) -> Self {
        Self::with_console_writer(config, std::io::stdout)
    }

    /// コンソールの出力先を指定してロガーを作成
    ///
    /// ファイル出力は常に追加し、コンソール出力は本番環境以外でのみ追加する。
    pub fn with_console_writer<W>(config: &LoggerConfig, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let formatter = config.formatter();
        let mut transports: Vec<Box<dyn Transport>> = vec![Box::new(FileTransport::new(
            config.file_dirname.clone(),
            formatter,
        ))];
        if !config.is_production() {
            transports.push(Box::new(ConsoleTransport::new(make_writer, formatter)));
        }
        Self::with_transports(config.initial_level, transports)
    }

    /// 任意のトランスポートでロガーを作成
    pub fn with_transports(level: SeverityLevel, transports: Vec<Box<dyn Transport>>) -> Self {
        Self {
            level: AtomicU8::new(level.rank()),
            transports,
        }
    }

    /// 現在のログレベル
    pub fn level(&self) -> SeverityLevel {
        SeverityLevel::from_rank(self.level.load(Ordering::Relaxed)).unwrap_or(SeverityLevel::Info)
    }

    /// ログレベルを変更
    ///
    /// 以降の呼び出しから全トランスポートに適用される。
    pub fn set_level(&self, level: SeverityLevel) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    /// 指定レベルが現在出力対象かどうか
    pub fn is_enabled(&self, level: SeverityLevel) -> bool {
        level.is_enabled_at(self.level())
    }

    /// 設定されているトランスポートの種類
    pub fn transport_kinds(&self) -> Vec<TransportKind> {
        self.transports.iter().map(|t| t.kind()).collect()
    }

    /// 指定レベルで出力
    ///
    /// 閾値より詳細なレベルのメッセージは破棄する。
    pub fn log(&self, level: SeverityLevel, message: impl Into<String>, metadata: Metadata) {
        if !self.is_enabled(level) {
            return;
        }

        let record = LogRecord::new(level, message, metadata);
        for transport in &self.transports {
            if let Err(e) = transport.write_record(&record) {
                error!(transport = ?transport.kind(), "ログの書き込みに失敗しました: {}", e);
            }
        }
    }

    level_methods! {
        /// アプリケーションの継続が困難な致命的障害
        fatal, fatal_with => SeverityLevel::Fatal;
        /// 重要な処理の失敗
        error, error_with => SeverityLevel::Error;
        /// 想定外だが処理は継続できる問題
        warn, warn_with => SeverityLevel::Warn;
        info, info_with => SeverityLevel::Info;
        /// HTTPリクエストの記録
        http, http_with => SeverityLevel::Http;
        verbose, verbose_with => SeverityLevel::Verbose;
        debug, debug_with => SeverityLevel::Debug;
        trace, trace_with => SeverityLevel::Trace;
        silly, silly_with => SeverityLevel::Silly;
    }

    /// `warn`の別名
    pub fn warning(&self, message: impl Into<String>) {
        self.warn(message);
    }

    /// HTTPステータスコードに応じたレベルで出力
    ///
    /// 2xx: info、3xx: warn、4xx/5xx: error、それ以外: info
    pub fn rest(&self, code: impl TryInto<u32>, message: impl Into<String>) {
        self.log(classify(code), message, Metadata::new());
    }
}

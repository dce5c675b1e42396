//! Leveled Logger - HTTPステータス連動のレベル付きロガー
//!
//! 日次ローテーションのファイル出力と、本番環境以外でのカラーコンソール出力を行う。
//!
//! ```no_run
//! use leveled_logger::{HttpStatusCode, LogFacade, LoggerConfig, SeverityLevel};
//!
//! let config = LoggerConfig::new(SeverityLevel::Info, "logs", "development");
//! let logger = LogFacade::new(&config);
//! logger.info("サーバーを起動しました");
//! logger.rest(HttpStatusCode::NotFound, "GET /users/42");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod http_code;
pub mod level;
pub mod logger;
pub mod record;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use config::LoggerConfig;
pub use error::{ConfigError, ParseLevelError, TransportError};
pub use format::{LineFormatter, LineStyle, TimestampStyle};
pub use http_code::{classify, HttpSeverityBucket, HttpStatusCode};
pub use level::SeverityLevel;
pub use logger::LogFacade;
pub use record::{LogRecord, Metadata};
pub use transport::{ConsoleTransport, FileTransport, Transport, TransportKind};

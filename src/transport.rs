//! 出力先（トランスポート）モジュール
//!
//! - ファイル: 日次ローテーション（`<dir>/YYYY-MM-DD.log`）、色なし
//! - コンソール: `MakeWriter`経由（既定は標準出力）、色付き

use crate::error::TransportError;
use crate::format::LineFormatter;
use crate::record::LogRecord;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;

/// トランスポートの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    File,
    Console,
}

/// 整形済みの行を受け取る出力先
pub trait Transport: Send + Sync {
    fn kind(&self) -> TransportKind;

    /// レコードを1行として書き込む
    fn write_record(&self, record: &LogRecord) -> Result<(), TransportError>;
}

/// 日次ローテーションするファイル出力
///
/// ファイル名はレコードのローカル日付（`YYYY-MM-DD.log`）。日付が変わったら開き直す。
/// ファイルは最初の書き込み時に開き、開けなかった場合は次の書き込みで再試行する。
pub struct FileTransport {
    dirname: PathBuf,
    formatter: LineFormatter,
    current: Mutex<Option<DailyFile>>,
}

/// 現在書き込み中の日付とファイル
struct DailyFile {
    date: NaiveDate,
    appender: RollingFileAppender,
}

impl FileTransport {
    pub fn new(dirname: impl Into<PathBuf>, formatter: LineFormatter) -> Self {
        Self {
            dirname: dirname.into(),
            formatter,
            current: Mutex::new(None),
        }
    }
}

/// `<dir>/<date>.log`を追記モードで開く
///
/// 日付の切り替えはこちらで行うため、アペンダー側のローテーションは無効にする。
fn open_appender(dirname: &Path, date: NaiveDate) -> Result<RollingFileAppender, InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(date.format("%Y-%m-%d").to_string())
        .filename_suffix("log")
        .build(dirname)?;
    debug!("ログファイルを開きました: {}/{}.log", dirname.display(), date);
    Ok(appender)
}

impl Transport for FileTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::File
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), TransportError> {
        let line = self.formatter.format_plain(record);
        let date = record.timestamp.date_naive();

        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.as_ref().map(|file| file.date) != Some(date) {
            *guard = None;
            let appender = open_appender(&self.dirname, date)?;
            *guard = Some(DailyFile { date, appender });
        }
        if let Some(file) = guard.as_mut() {
            writeln!(file.appender, "{}", line)?;
            file.appender.flush()?;
        }
        Ok(())
    }
}

/// コンソール出力
pub struct ConsoleTransport<W> {
    make_writer: W,
    formatter: LineFormatter,
}

impl<W> ConsoleTransport<W>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    pub fn new(make_writer: W, formatter: LineFormatter) -> Self {
        Self {
            make_writer,
            formatter,
        }
    }
}

impl<W> Transport for ConsoleTransport<W>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fn kind(&self) -> TransportKind {
        TransportKind::Console
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), TransportError> {
        let line = self.formatter.format_colored(record);
        let mut writer = self.make_writer.make_writer();
        writeln!(writer, "{}", line)?;
        Ok(())
    }
}

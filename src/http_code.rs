//! HTTPステータスコードとログレベルの対応モジュール

use crate::level::SeverityLevel;

/// 許可リストに含まれるHTTPステータスコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum HttpStatusCode {
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NoContent = 204,
    MultipleChoices = 300,
    MovedPermanently = 301,
    Found = 302,
    SeeOther = 303,
    NotModified = 304,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    Conflict = 409,
    UnprocessableEntity = 422,
    TooManyRequests = 429,
    InternalServerError = 500,
    NotImplemented = 501,
    ServiceUnavailable = 503,
}

impl HttpStatusCode {
    pub const ALL: [HttpStatusCode; 20] = [
        HttpStatusCode::Ok,
        HttpStatusCode::Created,
        HttpStatusCode::Accepted,
        HttpStatusCode::NoContent,
        HttpStatusCode::MultipleChoices,
        HttpStatusCode::MovedPermanently,
        HttpStatusCode::Found,
        HttpStatusCode::SeeOther,
        HttpStatusCode::NotModified,
        HttpStatusCode::BadRequest,
        HttpStatusCode::Unauthorized,
        HttpStatusCode::Forbidden,
        HttpStatusCode::NotFound,
        HttpStatusCode::MethodNotAllowed,
        HttpStatusCode::Conflict,
        HttpStatusCode::UnprocessableEntity,
        HttpStatusCode::TooManyRequests,
        HttpStatusCode::InternalServerError,
        HttpStatusCode::NotImplemented,
        HttpStatusCode::ServiceUnavailable,
    ];

    /// 数値のステータスコード
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

impl TryFrom<u16> for HttpStatusCode {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .find(|status| status.code() == code)
            .copied()
            .ok_or(code)
    }
}

impl From<HttpStatusCode> for u32 {
    fn from(status: HttpStatusCode) -> Self {
        u32::from(status.code())
    }
}

/// ステータスコード先頭桁による分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpSeverityBucket {
    Successful = 2,
    Redirection = 3,
    ClientError = 4,
    ServerError = 5,
}

impl HttpSeverityBucket {
    /// 先頭桁から分類を取得（対応なしの桁はNone）
    pub fn from_first_digit(digit: u32) -> Option<Self> {
        match digit {
            2 => Some(HttpSeverityBucket::Successful),
            3 => Some(HttpSeverityBucket::Redirection),
            4 => Some(HttpSeverityBucket::ClientError),
            5 => Some(HttpSeverityBucket::ServerError),
            _ => None,
        }
    }

    /// 分類に対応するログレベル
    pub fn severity(&self) -> SeverityLevel {
        match self {
            HttpSeverityBucket::Successful => SeverityLevel::Info,
            HttpSeverityBucket::Redirection => SeverityLevel::Warn,
            HttpSeverityBucket::ClientError | HttpSeverityBucket::ServerError => {
                SeverityLevel::Error
            }
        }
    }
}

/// 10進表記の先頭桁を取得
pub fn first_digit(code: u32) -> u32 {
    code.to_string()
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0)
}

/// HTTPステータスコードからログレベルを決定
///
/// 許可リスト外のコードでも失敗しない。対応する分類がなければ`info`。
/// `u32`に変換できない値（負数など）も`info`として扱う。
pub fn classify(code: impl TryInto<u32>) -> SeverityLevel {
    let code = code.try_into().unwrap_or(0);
    HttpSeverityBucket::from_first_digit(first_digit(code))
        .map(|bucket| bucket.severity())
        .unwrap_or(SeverityLevel::Info)
}

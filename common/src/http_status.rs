//! Status codes a remote usecase dispatches on.

use serde::Serialize;

use std::fmt::{Display, Formatter, Result as FormatResult};

/// Outcome of one HTTP exchange.
///
/// The named variants are the only codes the usecases attach meaning to.
/// Anything else lands in [`HttpStatusCode::Other`] and is treated as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpStatusCode {
    Ok,
    NoContent,
    BadRequest,
    Unauthorized,
    NotFound,
    ServerError,
    Other(u16),
}

impl HttpStatusCode {
    pub const fn as_u16(&self) -> u16 {
        match self {
            HttpStatusCode::Ok => 200,
            HttpStatusCode::NoContent => 204,
            HttpStatusCode::BadRequest => 400,
            HttpStatusCode::Unauthorized => 401,
            HttpStatusCode::NotFound => 404,
            HttpStatusCode::ServerError => 500,
            HttpStatusCode::Other(code) => *code,
        }
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        match code {
            200 => HttpStatusCode::Ok,
            204 => HttpStatusCode::NoContent,
            400 => HttpStatusCode::BadRequest,
            401 => HttpStatusCode::Unauthorized,
            404 => HttpStatusCode::NotFound,
            500 => HttpStatusCode::ServerError,
            other => HttpStatusCode::Other(other),
        }
    }
}

impl Display for HttpStatusCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.as_u16())
    }
}

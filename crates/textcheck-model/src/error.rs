use thiserror::Error;

/// Client-facing failure of a check request.
///
/// Every variant is a bad request from the transport's point of view; the
/// request is rejected before any text reaches the checking engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("'{code}' is not a language code known to this server. Supported language codes are: {supported}")]
    UnknownLanguage { code: String, supported: String },
}

impl RequestError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// HTTP status the transport should answer with.
    pub fn status_code(&self) -> u16 {
        400
    }
}

pub type Result<T> = std::result::Result<T, RequestError>;

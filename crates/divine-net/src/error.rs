use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone)]
pub enum NetError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("HTTP {status} for URL: {url}")]
    HttpError {
        url: Url,
        status: u16,
        body: Option<String>,
    },
    #[error("Timeout")]
    Timeout,
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl NetError {
    pub fn http<S: Into<String>>(msg: S) -> Self {
        Self::Http(msg.into())
    }

    pub fn http_error(status: u16, url: Url, body: Option<String>) -> Self {
        Self::HttpError { url, status, body }
    }

    pub fn timeout() -> Self {
        Self::Timeout
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetError::Timeout)
    }

    /// HTTP status code, if the server answered.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NetError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }
        Self::Http(error.to_string())
    }
}

impl From<url::ParseError> for NetError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

pub type NetResult<T> = Result<T, NetError>;

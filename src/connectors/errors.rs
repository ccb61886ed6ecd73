/// Failure of a single upstream fetch.
///
/// All variants are the same kind to callers: the fetch failed and the
/// boundary falls back. The variants only sharpen the log line.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Upstream answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },
    /// Body is not valid JSON or does not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ConnectorError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::HttpError(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::HttpError(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

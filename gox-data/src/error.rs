use reqwest::Error;
use thiserror::Error;

/*----- */
// DownloadError
/*----- */
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out")]
    HttpTimeout(reqwest::Error),

    #[error("Invalid response Content-Type: {content_type}")]
    InvalidContentType { content_type: String },

    #[error("Venue reported non-success result: {result}")]
    RequestFailed { result: String },

    #[error("Deserialising JSON error: {error} for payload: {payload}")]
    Deserialise {
        error: serde_json::Error,
        payload: String,
    },

    #[error("Invalid calendar date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Sink IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    // Transient failures are worth another attempt. Malformed payloads, bad
    // calendar input and sink IO failures will not fix themselves.
    #[allow(clippy::match_like_matches_macro)]
    pub fn is_transient(&self) -> bool {
        match self {
            DownloadError::Http(_) => true,
            DownloadError::HttpTimeout(_) => true,
            DownloadError::InvalidContentType { .. } => true,
            DownloadError::RequestFailed { .. } => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for DownloadError {
    fn from(error: Error) -> Self {
        match error {
            error if error.is_timeout() => DownloadError::HttpTimeout(error),
            error => DownloadError::Http(error),
        }
    }
}

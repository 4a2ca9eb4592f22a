use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection, timeout or body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("page {page}: upstream returned HTTP {status}")]
    Status { page: u32, status: u16 },

    #[error("page {page}: malformed response body: {source}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    /// Non-2xx status or an undecodable body.
    pub fn is_protocol(&self) -> bool {
        matches!(self, ScrapeError::Status { .. } | ScrapeError::Decode { .. })
    }
}

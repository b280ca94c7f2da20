use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("invalid hardware address length {0}, expected 6 bytes")]
    InvalidAddress(usize),

    #[error("failed to send magic packet: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid HTTP request: {0}")]
    InvalidRequest(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request to {endpoint} returned {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Lookup cancelled")]
    Cancelled,
}

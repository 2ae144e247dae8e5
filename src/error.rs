use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("api request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api responded with unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

/*
[INPUT]:  Error sources (transport, HTTP status, exchange envelope)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or recognized exchange messages
*/

use thiserror::Error;

/// Main error type for the FTX adapter.
///
/// Every variant is terminal for the call that produced it; the adapter
/// never retries internally. Callers that want backoff can branch on
/// [`FtxError::is_retryable`].
#[derive(Error, Debug)]
pub enum FtxError {
    /// The HTTP request could not be sent (connection failure, timeout)
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 429 - the exchange is throttling this client
    #[error("rate limited")]
    RateLimited,

    /// The response body could not be fully read
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// Non-200 status whose body did not parse as the known envelope
    #[error("unexpected status code = {0}")]
    UnexpectedStatus(u16),

    /// Non-200 status with a parsed envelope and an unrecognized message
    #[error("unexpected status code = {status}, error = {message}")]
    Api { status: u16, message: String },

    /// Cancel raced a fill; the order no longer exists on the book
    #[error("order already closed")]
    OrderAlreadyClosed,

    /// A previous cancel for the same order is still pending
    #[error("order already queued for cancellation")]
    OrderAlreadyQueued,

    /// HTTP 200 but the envelope carried `success: false`
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Request URL could not be constructed
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Request body could not be encoded or the envelope could not be decoded
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FtxError {
    /// Check if the error is worth retrying after a backoff.
    ///
    /// Only transport failures and rate limits qualify; envelope-level
    /// rejections are deterministic and will fail again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FtxError::Transport(_) | FtxError::RateLimited | FtxError::BodyRead(_)
        )
    }

    /// Check if the error means a cancel request was redundant rather
    /// than wrong (the order is gone or already queued for removal).
    pub fn is_cancel_noop(&self) -> bool {
        matches!(
            self,
            FtxError::OrderAlreadyClosed | FtxError::OrderAlreadyQueued
        )
    }
}

/// Result type alias for FTX adapter operations
pub type Result<T> = std::result::Result<T, FtxError>;

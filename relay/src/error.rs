use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds of a relay call.
///
/// The display text is what ends up on the chat page, so it names the kind
/// of failure and never carries transport internals. The underlying source
/// is kept for logging.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not reach the remote service")]
    Connect(#[source] reqwest::Error),

    #[error("the remote service did not answer in time")]
    Timeout(#[source] reqwest::Error),

    #[error("the remote service returned status {0}")]
    Status(StatusCode),

    #[error("the remote service sent a reply that is not valid JSON")]
    Decode(#[source] reqwest::Error),
}

impl RelayError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Connect(err)
        }
    }

    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Decode(err)
        }
    }
}

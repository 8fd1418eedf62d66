//! Failure of a load request.
//!
//! Every non-success outcome collapses into [`LoadError`]; the variants
//! only describe the cause for logging. What the user sees comes from
//! [`LoadError::user_message`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Credentials or the multipart body could not be built
    #[error("Failed to build request: {0}")]
    Encode(String),

    /// Network failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("HTTP error: {status}")]
    Server { status: u16, detail: Option<String> },

    /// Success status but the body was not JSON
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
}

impl LoadError {
    /// Text for the user notification: the server's `detail` when it sent
    /// one, otherwise a description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for LoadError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

//! Error type returned by `Client::request`.
//!
//! Each failure stage has its own variant so callers can tell a tool failure
//! (curl exited non-zero) from an HTTP failure (status >= 400) without
//! matching on message text.

use crate::exit_code;
use crate::extract::ExtractError;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The configured binary is neither an existing file nor on `PATH`.
    #[error("executable '{binary}' not found")]
    BinaryNotFound { binary: String },

    /// The tool exited with a non-zero exit code.
    #[error("Curl Error. {} ({exit_code})", exit_code::description(*.exit_code))]
    Tool { exit_code: i32 },

    /// The tool could not be started, or was terminated without an exit code.
    #[error("unexpected error executing curl: {message}. stderr: {stderr}")]
    Execution { message: String, stderr: String },

    /// stdout contained no HTTP response block.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Status line of the final response has fewer than two tokens.
    #[error("unable to extract status code from '{line}'")]
    StatusLine { line: String },

    /// Second token of the status line is not a valid status code.
    #[error("invalid status code format: {token}")]
    StatusCode { token: String },

    /// Well-formed response with status >= 400.
    #[error("HTTP Error. {reason} ({status})")]
    Http { status: u16, reason: String },
}

impl RequestError {
    pub fn is_tool_error(&self) -> bool {
        matches!(self, RequestError::Tool { .. })
    }

    pub fn is_http_error(&self) -> bool {
        matches!(self, RequestError::Http { .. })
    }

    /// Exit code for [`RequestError::Tool`].
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RequestError::Tool { exit_code } => Some(*exit_code),
            _ => None,
        }
    }

    /// Status code for [`RequestError::Http`].
    pub fn http_status(&self) -> Option<u16> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

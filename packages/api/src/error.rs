//! Error type for calls against the registration API.

use thiserror::Error;

/// Fallback text when neither the server nor the transport gave us anything
/// usable to show.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// A failed API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, TLS, aborted...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `message` carries the `message` field of the error body when the
    /// server supplied one.
    #[error("server returned status {status}")]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }

    /// Human-readable message for notices: prefer the server-provided
    /// message, then the transport error text, then a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            ApiError::Server { .. } => GENERIC_ERROR_MESSAGE.to_string(),
            ApiError::Transport(err) => {
                let text = err.to_string();
                if text.trim().is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    text
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message(), "Email already registered");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn blank_server_message_falls_back_to_generic() {
        let err = ApiError::Server { status: 500, message: Some("   ".to_string()) };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}

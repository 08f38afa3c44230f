use thiserror::Error;

/// Text shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Text shown for any non-success HTTP status; the body is never inspected.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch images";

/// Failures of a single feed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Failed to fetch images (HTTP {0})")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl FeedError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// The message surfaced in the gallery. Network and decode failures look
    /// the same to the user.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::Status(_) => FETCH_FAILED_MESSAGE.to_string(),
            FeedError::Network(message) | FeedError::Decode(message) => {
                let message = message.trim();
                if message.is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    message.to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_use_fixed_text() {
        assert_eq!(FeedError::Status(503).user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(
            FeedError::Status(404).to_string(),
            "Failed to fetch images (HTTP 404)"
        );
    }

    #[test]
    fn thrown_errors_keep_their_message() {
        let err = FeedError::network("connection refused");
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn empty_messages_fall_back() {
        assert_eq!(FeedError::network("").user_message(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(FeedError::decode("   ").user_message(), UNKNOWN_ERROR_MESSAGE);
    }
}

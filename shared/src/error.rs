use thiserror::Error;

/// Failure of one REST exchange.
///
/// Transport and business failures take the same rollback-and-notify path in
/// the UI; the variants only decide the notice text and whether an initial
/// fetch may be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status. `message` is the envelope's text when the body had one.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
        /// Server-provided explanation, if any.
        message: Option<String>,
    },
    /// A 2xx envelope carried `success: false`.
    #[error("{0}")]
    Business(String),
    /// Response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Decode(String),
    /// 404 on a single-resource lookup.
    #[error("Not found")]
    NotFound,
}

impl ApiError {
    /// Bare status error with no server message.
    pub fn http(status: u16) -> Self {
        ApiError::Http {
            status,
            message: None,
        }
    }

    /// Classify a non-2xx response. The status always decides retrying; a
    /// non-blank envelope `message` only replaces the notice text. A 404 with
    /// no message is [`ApiError::NotFound`].
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|text| !text.trim().is_empty());
        match (status, message) {
            (404, None) => ApiError::NotFound,
            (status, message) => ApiError::Http {
                status,
                message,
            },
        }
    }

    /// Text shown in the transient error notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Please check your connection.".to_string(),
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Http {
                status, ..
            } if *status >= 500 => "Server error. Please try again.".to_string(),
            ApiError::Http {
                status, ..
            } => format!("Request failed ({status})."),
            ApiError::Business(message) => message.clone(),
            ApiError::Decode(_) => "Unexpected response from server.".to_string(),
            ApiError::NotFound => "The requested item does not exist.".to_string(),
        }
    }

    /// Only transport-level failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Http {
                status, ..
            } => *status >= 500 || *status == 408 || *status == 429,
            ApiError::Business(_) | ApiError::Decode(_) | ApiError::NotFound => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn business_errors_surface_server_message() {
        let err = ApiError::Business("Article already liked".to_string());
        assert_eq!(err.user_message(), "Article already liked");
        assert!(!err.is_retryable());
    }

    #[test]
    fn transport_errors_are_retryable() {
        assert!(ApiError::Network("offline".to_string()).is_retryable());
        assert!(ApiError::http(503).is_retryable());
        assert!(!ApiError::http(400).is_retryable());
        assert!(!ApiError::NotFound.is_retryable());
    }

    #[test]
    fn status_decides_retry_even_with_server_message() {
        let overloaded = ApiError::from_status(503, Some("Server error".to_string()));
        assert!(overloaded.is_retryable());
        assert_eq!(overloaded.user_message(), "Server error");

        let rejected = ApiError::from_status(400, Some("Article already liked".to_string()));
        assert!(!rejected.is_retryable());
        assert_eq!(rejected.user_message(), "Article already liked");

        assert_eq!(ApiError::from_status(404, Some("  ".to_string())), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500, None).user_message(), "Server error. Please try again.");
    }
}

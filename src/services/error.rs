use thiserror::Error;

/// Failure of one API gateway call. `Http` carries the backend's `error`
/// payload when it sent one, so callers can prefer the server's wording.
#[derive(Clone, PartialEq, Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error detail"))]
    Http { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Error string from the backend payload, when present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// A 403 means the backend refused the action for this role; callers
    /// surface it differently from generic failures.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Http { status: 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_only_for_403() {
        let forbidden = ApiError::Http {
            status: 403,
            message: None,
        };
        let not_found = ApiError::Http {
            status: 404,
            message: None,
        };
        assert!(forbidden.is_forbidden());
        assert!(!not_found.is_forbidden());
        assert!(!ApiError::Network("offline".to_string()).is_forbidden());
    }

    #[test]
    fn server_message_prefers_backend_payload() {
        let error = ApiError::Http {
            status: 400,
            message: Some("Item already exists".to_string()),
        };
        assert_eq!(error.server_message(), Some("Item already exists"));
        assert_eq!(ApiError::Decode("bad json".to_string()).server_message(), None);
    }
}

use thiserror::Error;

/// Client-side request errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Client setup failed: {message}")]
    Setup { message: String },

    #[error("Query cache error: {message}")]
    Cache { message: String },
}

impl ClientError {
    /// Whether a later retry could succeed
    pub fn is_temporary(&self) -> bool {
        match self {
            ClientError::Network { .. } => true,
            ClientError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Cache {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_errors() {
        assert!(ClientError::Network {
            message: "offline".to_string()
        }
        .is_temporary());
        assert!(ClientError::HttpStatus {
            status: 503,
            url: "/categories".to_string()
        }
        .is_temporary());
        assert!(!ClientError::HttpStatus {
            status: 404,
            url: "/lists/1".to_string()
        }
        .is_temporary());
        assert!(!ClientError::Decode {
            message: "bad json".to_string()
        }
        .is_temporary());
    }
}

//! Error types for REST API operations

use poloniex_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// Remote logical failures (invalid key, insufficient funds, bad
/// parameters) are not represented here: Poloniex reports them with an
/// `error` field inside an HTTP 200 JSON body, which the client returns
/// verbatim to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (connection, timeout, or a non-JSON body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing API credentials for a private command
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Request parameters could not be URL-encoded
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_required_display() {
        let err = RestError::AuthRequired;
        assert!(err.to_string().contains("Authentication required"));
    }

    #[test]
    fn test_auth_error_passes_through() {
        let err: RestError = AuthError::EnvVarNotSet("POLONIEX_API_KEY".to_string()).into();
        assert!(err.to_string().contains("POLONIEX_API_KEY"));
    }
}

//! Error types for credential handling

/// Errors that can occur while loading credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Key file could not be read
    #[error("Failed to read key file: {0}")]
    KeyFileRead(#[from] std::io::Error),

    /// Key file contents were not the expected JSON shape
    #[error("Malformed key file: {0}")]
    KeyFileParse(#[from] serde_json::Error),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("POLONIEX_API_KEY".to_string());
        assert!(err.to_string().contains("POLONIEX_API_KEY"));
    }
}

//! Supabase error types
use syntera_config::ConfigError;
use thiserror::Error;

/// Result type for Supabase operations
pub type SupabaseResult<T> = Result<T, SupabaseError>;

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SupabaseError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an API error without a PostgREST code
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: None,
            message: msg.into(),
        }
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, SupabaseError::Network(_))
    }

    /// Check if the service rejected the credential
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SupabaseError::Api { status: 401 | 403, .. })
    }
}

impl From<reqwest::Error> for SupabaseError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SupabaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl From<ConfigError> for SupabaseError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

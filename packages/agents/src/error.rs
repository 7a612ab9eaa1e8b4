use syntera_supabase::SupabaseError;
use thiserror::Error;

pub type AgentConfigResult<T> = Result<T, AgentConfigError>;

#[derive(Error, Debug)]
pub enum AgentConfigError {
    #[error("Agent {0} not found")]
    NotFound(String),
    #[error("Agent id must not be empty")]
    InvalidId,
    /// Failure from the backing store, passed through as-is
    #[error(transparent)]
    Upstream(#[from] SupabaseError),
}

impl AgentConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AgentConfigError::NotFound(_))
    }

    pub fn upstream(&self) -> Option<&SupabaseError> {
        match self {
            AgentConfigError::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_id() {
        let error = AgentConfigError::NotFound("agent-42".to_string());
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Agent agent-42 not found");
    }

    #[test]
    fn test_upstream_is_transparent() {
        let error: AgentConfigError = SupabaseError::Network("connection refused".into()).into();
        assert!(!error.is_not_found());
        assert_eq!(error.to_string(), "Network error: connection refused");
        assert!(error.upstream().map(|e| e.is_network_error()).unwrap_or(false));
    }
}
